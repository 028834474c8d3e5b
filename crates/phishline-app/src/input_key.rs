//! Terminal-agnostic key events.
//!
//! `InputKey` is what the key handlers match on. The TUI translates
//! crossterm events into this enum at its boundary, so this crate (and
//! its tests) never touch crossterm types.

/// One decoded keystroke.
///
/// The translator may emit keys no handler binds (arrows, Home/End);
/// handlers ignore them through their catch-all arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    /// A Ctrl chord, carrying the plain letter (`CharCtrl('s')` for Ctrl+S).
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    /// Shift+Tab, whichever encoding the terminal sends it in.
    BackTab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}
