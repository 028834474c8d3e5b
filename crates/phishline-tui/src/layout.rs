//! Splits the terminal into a header row, the two main panels, and a
//! keybinding hint bar at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Where each top-level widget draws this frame.
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Main header area (title + auth status)
    pub header: Rect,

    /// Prediction panel (email input + result line)
    pub prediction: Rect,

    /// Dashboard panel (totals + proportion chart)
    pub dashboard: Rect,

    /// Bottom hint bar (keybindings)
    pub status: Rect,
}

/// Carve `area` up for one frame.
///
/// The content row splits 55/45 between the prediction panel and the
/// dashboard so long email bodies get the wider column.
pub fn create(area: Rect) -> ScreenAreas {
    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Min(8),    // Panels
        Constraint::Length(2), // Hint bar (top border + content row)
    ])
    .split(area);

    let columns =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(rows[1]);

    ScreenAreas {
        header: rows[0],
        prediction: columns[0],
        dashboard: columns[1],
        status: rows[2],
    }
}
