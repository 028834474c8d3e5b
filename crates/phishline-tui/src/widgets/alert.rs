//! Blocking alert modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::styles;

const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

/// Centered alert with a single dismiss action
pub struct Alert<'a> {
    message: &'a str,
}

impl<'a> Alert<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for Alert<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
        clear_area(buf, modal_area);
        render_shadow(buf, modal_area);

        let block = styles::modal_block(" Notice ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Message (may wrap)
            Constraint::Min(1),    // Dismiss hint
        ])
        .split(inner);

        Paragraph::new(self.message)
            .style(styles::TEXT_PRIMARY)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(rows[1], buf);

        let hint = Line::from(vec![
            Span::styled("[", styles::TEXT_MUTED),
            Span::styled("Enter", styles::KEYBINDING),
            Span::styled("] OK", styles::TEXT_MUTED),
        ]);
        Paragraph::new(hint)
            .alignment(Alignment::Center)
            .render(rows[2], buf);
    }
}
