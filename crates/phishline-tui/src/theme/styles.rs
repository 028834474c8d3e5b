//! Style constants and block builders for the Phishline look.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

/// Body text
pub const TEXT_PRIMARY: Style = Style::new().fg(palette::TEXT_PRIMARY);

/// Supporting text (counts, legends, field labels)
pub const TEXT_SECONDARY: Style = Style::new().fg(palette::TEXT_SECONDARY);

/// De-emphasized text (hints, placeholders, prompts)
pub const TEXT_MUTED: Style = Style::new().fg(palette::TEXT_MUTED);

/// Accent-colored text
pub const ACCENT: Style = Style::new().fg(palette::ACCENT);

/// Accent with emphasis, for the number the eye should land on
pub const ACCENT_BOLD: Style = Style::new()
    .fg(palette::ACCENT)
    .add_modifier(Modifier::BOLD);

/// Legitimate verdicts and the logged-in marker
pub const STATUS_GREEN: Style = Style::new().fg(palette::STATUS_GREEN);

/// Phishing verdicts and failure text
pub const STATUS_RED: Style = Style::new().fg(palette::STATUS_RED);

/// Key names inside bracketed keybinding hints
pub const KEYBINDING: Style = Style::new().fg(palette::STATUS_YELLOW);

/// The form field that owns the cursor: black on cyan
pub const FOCUSED_FIELD: Style = Style::new()
    .fg(palette::CONTRAST_FG)
    .bg(palette::ACCENT)
    .add_modifier(Modifier::BOLD);

/// Panel border at rest
pub const BORDER_INACTIVE: Style = Style::new().fg(palette::BORDER_DIM);

/// Panel border while the panel has focus
pub const BORDER_ACTIVE: Style = Style::new().fg(palette::BORDER_ACTIVE);

/// Rounded panel chrome, border brightened while focused.
pub fn glass_block(focused: bool) -> Block<'static> {
    let border = if focused { BORDER_ACTIVE } else { BORDER_INACTIVE };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// Chrome for modal dialogs: rounded border over the popup background.
pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(BORDER_INACTIVE)
        .style(Style::new().bg(palette::POPUP_BG))
}
