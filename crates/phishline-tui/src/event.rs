//! Crossterm input, translated for the update loop.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use phishline_app::message::Message;
use phishline_app::InputKey;
use phishline_core::prelude::*;
use std::time::Duration;

/// Idle timeout per poll; expiry becomes a `Tick` so the UI keeps redrawing.
const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Translate a crossterm key event into the backend-agnostic `InputKey`.
///
/// Keys the app never binds (function keys, paging) translate to `None`
/// and are swallowed before they reach the update loop.
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    // Ctrl chords are their own variant so handlers can bind them directly
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char(c) = key.code {
            return Some(InputKey::CharCtrl(c));
        }
    }

    // Shift+Tab arrives as Tab+SHIFT on some terminals and BackTab on others
    if key.code == KeyCode::Tab && key.modifiers.contains(KeyModifiers::SHIFT) {
        return Some(InputKey::BackTab);
    }

    let mapped = match key.code {
        KeyCode::Char(c) => InputKey::Char(c),
        KeyCode::Enter => InputKey::Enter,
        KeyCode::Esc => InputKey::Esc,
        KeyCode::Tab => InputKey::Tab,
        KeyCode::BackTab => InputKey::BackTab,
        KeyCode::Backspace => InputKey::Backspace,
        KeyCode::Delete => InputKey::Delete,
        KeyCode::Up => InputKey::Up,
        KeyCode::Down => InputKey::Down,
        KeyCode::Left => InputKey::Left,
        KeyCode::Right => InputKey::Right,
        KeyCode::Home => InputKey::Home,
        KeyCode::End => InputKey::End,
        _ => return None,
    };
    Some(mapped)
}

/// Poll for the next terminal event, ticking on timeout.
pub fn poll() -> Result<Option<Message>> {
    if !event::poll(POLL_TIMEOUT)? {
        return Ok(Some(Message::Tick));
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    // Release/repeat events would double every keystroke on Windows
    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    Ok(key_event_to_input(key).map(Message::Key))
}
