//! Email check submit/completion handlers

use crate::state::AppState;
use phishline_core::prelude::*;

use super::{UpdateAction, UpdateResult};

/// Shown when a classify call fails for any reason, 401 included.
pub const PREDICT_FAILURE_LABEL: &str = "Unauthorized or API error.";

/// Replace the email text under edit.
///
/// Ignored while a check is in flight so the submitted text cannot
/// change out from under the request.
pub fn handle_prediction_input(state: &mut AppState, text: String) -> UpdateResult {
    if !state.prediction.busy {
        state.prediction.input = text;
    }
    UpdateResult::none()
}

/// Dispatch a classify request for the current email text.
///
/// No-op when the text is blank or a request is already outstanding.
pub fn handle_submit_prediction(state: &mut AppState) -> UpdateResult {
    if !state.prediction.can_submit() {
        return UpdateResult::none();
    }

    state.prediction.busy = true;

    let token = if state.session.token.is_empty() {
        None
    } else {
        Some(state.session.token.clone())
    };

    UpdateResult::action(UpdateAction::Predict {
        email: state.prediction.input.clone(),
        token,
    })
}

/// The backend produced a verdict. Display it verbatim and nudge the
/// dashboard to refetch.
pub fn handle_predict_completed(state: &mut AppState, label: String) -> UpdateResult {
    state.prediction.busy = false;
    state.prediction.last_result = Some(label);
    state.refresh_signal += 1;
    UpdateResult::message(crate::message::Message::RefreshDashboard)
}

/// The classify call failed. A single generic line stands in for every
/// failure kind; the refresh signal does not move.
pub fn handle_predict_failed(state: &mut AppState, reason: String) -> UpdateResult {
    warn!("Predict request failed: {}", reason);
    state.prediction.busy = false;
    state.prediction.last_result = Some(PREDICT_FAILURE_LABEL.to_string());
    UpdateResult::none()
}
