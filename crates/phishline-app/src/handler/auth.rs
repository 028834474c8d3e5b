//! Login, register, and logout handlers

use crate::message::Message;
use crate::state::{AppState, UiMode};
use phishline_core::prelude::*;
use phishline_core::Session;

use super::{UpdateAction, UpdateResult};

pub const LOGIN_FAILED_ALERT: &str = "Login failed. Check your credentials.";
pub const REGISTERED_ALERT: &str = "User registered! You can now log in.";
pub const DUPLICATE_USER_ALERT: &str = "Username already exists.";
pub const MISSING_CREDENTIALS_ALERT: &str = "Please enter a username and password.";

/// Open the auth dialog, or close it when already open.
pub fn handle_toggle_auth_dialog(state: &mut AppState) -> UpdateResult {
    match state.ui_mode {
        UiMode::Auth => state.hide_auth_dialog(),
        _ => state.show_auth_dialog(),
    }
    UpdateResult::none()
}

/// Close the dialog and discard whatever was typed.
pub fn handle_close_auth_dialog(state: &mut AppState) -> UpdateResult {
    state.hide_auth_dialog();
    UpdateResult::none()
}

/// Replace the focused credential field.
///
/// Ignored while a login/register request is outstanding.
pub fn handle_auth_input(state: &mut AppState, text: String) -> UpdateResult {
    if !state.auth.busy {
        *state.auth.focused_value_mut() = text;
    }
    UpdateResult::none()
}

/// Move focus between the username and password fields.
pub fn handle_auth_focus_toggle(state: &mut AppState) -> UpdateResult {
    state.auth.focus.toggle();
    UpdateResult::none()
}

/// Dispatch a login request with the typed credentials.
pub fn handle_submit_login(state: &mut AppState) -> UpdateResult {
    if state.auth.busy {
        return UpdateResult::none();
    }
    if state.auth.username.is_empty() || state.auth.password.is_empty() {
        state.show_alert(MISSING_CREDENTIALS_ALERT);
        return UpdateResult::none();
    }

    state.auth.busy = true;
    UpdateResult::action(UpdateAction::Login {
        username: state.auth.username.clone(),
        password: state.auth.password.clone(),
    })
}

/// Login succeeded: install the session, persist it, close the dialog,
/// and trigger a dashboard fetch for the new token.
pub fn handle_login_completed(state: &mut AppState, session: Session) -> UpdateResult {
    info!("Logged in as {}", session.username);
    state.auth.busy = false;
    state.set_session(session.clone());
    state.hide_auth_dialog();

    UpdateResult {
        message: Some(Message::RefreshDashboard),
        action: Some(UpdateAction::SaveSession { session }),
    }
}

/// Login rejected or failed. The typed credentials stay in the dialog so
/// the user can correct them after dismissing the alert.
pub fn handle_login_failed(state: &mut AppState, reason: String) -> UpdateResult {
    warn!("Login failed: {}", reason);
    state.auth.busy = false;
    state.show_alert(LOGIN_FAILED_ALERT);
    UpdateResult::none()
}

/// Dispatch a register request with the typed credentials.
pub fn handle_submit_register(state: &mut AppState) -> UpdateResult {
    if state.auth.busy {
        return UpdateResult::none();
    }
    if state.auth.username.is_empty() || state.auth.password.is_empty() {
        state.show_alert(MISSING_CREDENTIALS_ALERT);
        return UpdateResult::none();
    }

    state.auth.busy = true;
    UpdateResult::action(UpdateAction::Register {
        username: state.auth.username.clone(),
        password: state.auth.password.clone(),
    })
}

/// Registration accepted. Advisory only: the user still has to log in.
pub fn handle_register_completed(state: &mut AppState) -> UpdateResult {
    state.auth.busy = false;
    state.show_alert(REGISTERED_ALERT);
    UpdateResult::none()
}

/// Registration rejected (duplicate username, validation error, outage).
pub fn handle_register_failed(state: &mut AppState, message: String) -> UpdateResult {
    warn!("Registration failed: {}", message);
    state.auth.busy = false;
    state.show_alert(message);
    UpdateResult::none()
}

/// Drop the session and wipe saved credentials. The dashboard epoch is
/// bumped so any fetch still in flight lands stale and gets dropped.
pub fn handle_logout(state: &mut AppState) -> UpdateResult {
    info!("Logging out {}", state.session.username);
    state.clear_session();
    UpdateResult::action(UpdateAction::ClearStorage)
}
