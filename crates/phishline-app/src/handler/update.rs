//! Top-level message routing.

use crate::message::Message;
use crate::state::AppState;

use super::{auth, dashboard, keys::handle_key, prediction, UpdateResult};

/// Apply one message to the state. Pure: any I/O the message calls for
/// comes back as the [`UpdateAction`](super::UpdateAction) in the result.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // --- Email classification ---
        Message::PredictionInput { text } => prediction::handle_prediction_input(state, text),
        Message::SubmitPrediction => prediction::handle_submit_prediction(state),
        Message::PredictCompleted { label } => prediction::handle_predict_completed(state, label),
        Message::PredictFailed { reason } => prediction::handle_predict_failed(state, reason),

        // --- Auth ---
        Message::ToggleAuthDialog => auth::handle_toggle_auth_dialog(state),
        Message::CloseAuthDialog => auth::handle_close_auth_dialog(state),
        Message::AuthInput { text } => auth::handle_auth_input(state, text),
        Message::AuthFocusToggle => auth::handle_auth_focus_toggle(state),
        Message::SubmitLogin => auth::handle_submit_login(state),
        Message::LoginCompleted { session } => auth::handle_login_completed(state, session),
        Message::LoginFailed { reason } => auth::handle_login_failed(state, reason),
        Message::SubmitRegister => auth::handle_submit_register(state),
        Message::RegisterCompleted => auth::handle_register_completed(state),
        Message::RegisterFailed { message } => auth::handle_register_failed(state, message),
        Message::Logout => auth::handle_logout(state),

        // --- Dashboard ---
        Message::RefreshDashboard => dashboard::handle_refresh_dashboard(state),
        Message::DashboardFetchCompleted { summary, epoch } => {
            dashboard::handle_fetch_completed(state, summary, epoch)
        }
        Message::DashboardFetchFailed { failure, epoch } => {
            dashboard::handle_fetch_failed(state, failure, epoch)
        }

        // --- Alerts ---
        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }
    }
}
