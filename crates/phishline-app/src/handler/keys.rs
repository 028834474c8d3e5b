//! Keyboard dispatch, one handler per UI mode.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Turn a key press into a message. `None` means the key does nothing
/// in the current mode.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Auth => handle_key_auth(state, key),
        UiMode::Alert => handle_key_alert(key),
    }
}

/// Normal mode: the email editor has the keyboard.
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::CharCtrl('c') | InputKey::CharCtrl('q') => Some(Message::Quit),

        // Submit the email for classification
        InputKey::CharCtrl('s') => Some(Message::SubmitPrediction),

        // Open the login/register dialog
        InputKey::CharCtrl('l') => Some(Message::ToggleAuthDialog),

        // Log out (only meaningful with an active session)
        InputKey::CharCtrl('x') => {
            if state.is_authenticated() {
                Some(Message::Logout)
            } else {
                None
            }
        }

        // --- Email editing ---
        InputKey::CharCtrl('u') => Some(Message::PredictionInput {
            text: String::new(),
        }),

        InputKey::Backspace => {
            let mut text = state.prediction.input.clone();
            text.pop();
            Some(Message::PredictionInput { text })
        }

        // Email bodies are multi-line; Enter inserts a line break
        InputKey::Enter => {
            let mut text = state.prediction.input.clone();
            text.push('\n');
            Some(Message::PredictionInput { text })
        }

        InputKey::Char(c) => {
            let mut text = state.prediction.input.clone();
            text.push(c);
            Some(Message::PredictionInput { text })
        }

        _ => None,
    }
}

/// Auth dialog: captures everything until closed.
fn handle_key_auth(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Ctrl+C still quits from inside the dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc and the key that opened it both close
        InputKey::Esc | InputKey::CharCtrl('l') => Some(Message::CloseAuthDialog),

        // Two fields, so forward and backward focus both flip
        InputKey::Tab | InputKey::BackTab => Some(Message::AuthFocusToggle),

        // Submit
        InputKey::Enter => Some(Message::SubmitLogin),
        InputKey::CharCtrl('r') => Some(Message::SubmitRegister),

        // --- Credential editing ---
        InputKey::CharCtrl('u') => Some(Message::AuthInput {
            text: String::new(),
        }),

        InputKey::Backspace => {
            let mut text = focused_value(state).to_string();
            text.pop();
            Some(Message::AuthInput { text })
        }

        InputKey::Char(c) => {
            let mut text = focused_value(state).to_string();
            text.push(c);
            Some(Message::AuthInput { text })
        }

        _ => None,
    }
}

/// Alert modal: any of the dismiss keys, or quit.
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn focused_value(state: &AppState) -> &str {
    match state.auth.focus {
        crate::state::AuthField::Username => &state.auth.username,
        crate::state::AuthField::Password => &state.auth.password,
    }
}
