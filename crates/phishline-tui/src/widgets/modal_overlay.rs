//! Modal chrome helpers: centering, backdrop dimming, drop shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect inside `area`, shrinking it to fit when the
/// terminal is smaller than the requested size.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use phishline_tui::widgets::modal_overlay::centered_rect;
///
/// let screen = Rect::new(0, 0, 80, 24);
/// assert_eq!(centered_rect(50, 7, screen), Rect::new(15, 8, 50, 7));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Restyle everything under a modal so the backdrop reads as inactive.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    buf.set_style(
        area,
        Style::default()
            .fg(palette::TEXT_MUTED)
            .bg(palette::DEEPEST_BG),
    );
}

/// Paint a one-cell drop shadow along the right and bottom edges of a
/// modal, offset by one cell so the box appears raised.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_strip = Rect {
        x: modal.right(),
        y: modal.y.saturating_add(1),
        width: 1,
        height: modal.height,
    };
    let bottom_strip = Rect {
        x: modal.x.saturating_add(1),
        y: modal.bottom(),
        width: modal.width,
        height: 1,
    };

    for strip in [right_strip, bottom_strip] {
        for position in strip.intersection(buf.area).positions() {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_char(' ');
                cell.set_style(style);
            }
        }
    }
}

/// Reset the cells a modal is about to draw over.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}
