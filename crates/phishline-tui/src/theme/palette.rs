//! Truecolor palette for the Phishline UI.
//!
//! All values are RGB; crossterm downsamples them on terminals without
//! truecolor support.

use ratatui::style::Color;

// --- Surfaces ---
pub const DEEPEST_BG: Color = Color::Rgb(11, 15, 20);
pub const CARD_BG: Color = Color::Rgb(17, 22, 29);
pub const POPUP_BG: Color = Color::Rgb(26, 32, 41);
pub const SHADOW: Color = Color::Rgb(5, 7, 10);

// --- Chrome ---
pub const BORDER_DIM: Color = Color::Rgb(46, 54, 64);
pub const BORDER_ACTIVE: Color = Color::Rgb(64, 200, 188);
pub const ACCENT: Color = Color::Rgb(64, 200, 188);
pub const CONTRAST_FG: Color = Color::Rgb(11, 15, 20); // foreground on ACCENT fills

// --- Foreground ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 178);
pub const TEXT_MUTED: Color = Color::Rgb(90, 101, 115);

// --- Status and verdicts ---
pub const STATUS_GREEN: Color = Color::Rgb(74, 222, 128);
pub const STATUS_RED: Color = Color::Rgb(248, 113, 113);
pub const STATUS_YELLOW: Color = Color::Rgb(250, 204, 21); // doubles as the keybinding hint color
pub const CHART_LEGIT: Color = Color::Rgb(74, 222, 128);
pub const CHART_PHISHING: Color = Color::Rgb(255, 140, 0);
