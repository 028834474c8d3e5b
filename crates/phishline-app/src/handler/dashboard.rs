//! Stats fetch and staleness handlers

use crate::message::DashboardFailure;
use crate::state::{AppState, DashboardPhase};
use phishline_core::prelude::*;
use phishline_core::DashboardSummary;

use super::{UpdateAction, UpdateResult};

pub const DASHBOARD_ERROR_ALERT: &str = "Failed to load dashboard data.";

/// Start a fresh stats fetch for the current session.
///
/// Without a token there is nothing to fetch; the panel falls back to
/// the logged-out prompt and the backend is never contacted.
pub fn handle_refresh_dashboard(state: &mut AppState) -> UpdateResult {
    if state.session.token.is_empty() {
        state.dashboard.phase = DashboardPhase::LoggedOut;
        return UpdateResult::none();
    }

    let epoch = state.dashboard.next_epoch();
    state.dashboard.phase = DashboardPhase::Loading;

    UpdateResult::action(UpdateAction::FetchDashboard {
        token: state.session.token.clone(),
        epoch,
    })
}

/// Stats arrived. Applied only when this response belongs to the most
/// recently dispatched fetch; superseded responses are dropped.
pub fn handle_fetch_completed(
    state: &mut AppState,
    summary: DashboardSummary,
    epoch: u64,
) -> UpdateResult {
    if epoch != state.dashboard.epoch {
        debug!(
            "Dropping stale dashboard response (epoch {} != {})",
            epoch, state.dashboard.epoch
        );
        return UpdateResult::none();
    }

    state.dashboard.phase = DashboardPhase::Ready(summary);
    UpdateResult::none()
}

/// The fetch failed. A 401 prompts re-login; anything else drops prior
/// data and raises a blocking alert.
pub fn handle_fetch_failed(
    state: &mut AppState,
    failure: DashboardFailure,
    epoch: u64,
) -> UpdateResult {
    if epoch != state.dashboard.epoch {
        debug!(
            "Dropping stale dashboard failure (epoch {} != {})",
            epoch, state.dashboard.epoch
        );
        return UpdateResult::none();
    }

    match failure {
        DashboardFailure::Unauthorized => {
            state.dashboard.phase = DashboardPhase::Unauthorized;
        }
        DashboardFailure::Other => {
            state.dashboard.phase = DashboardPhase::Error;
            state.show_alert(DASHBOARD_ERROR_ALERT);
        }
    }
    UpdateResult::none()
}
