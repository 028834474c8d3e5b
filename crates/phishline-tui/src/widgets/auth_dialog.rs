//! Login / register modal dialog

use phishline_app::state::{AuthDialogState, AuthField};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::modal_overlay::{centered_rect, clear_area, dim_background, render_shadow};
use crate::theme::{palette, styles};

const DIALOG_WIDTH: u16 = 46;
const DIALOG_HEIGHT: u16 = 11;

/// Centered account dialog with username and password fields
pub struct AuthDialog<'a> {
    state: &'a AuthDialogState,
}

impl<'a> AuthDialog<'a> {
    pub fn new(state: &'a AuthDialogState) -> Self {
        Self { state }
    }

    fn field_line(&self, value: &str, focused: bool, mask: bool) -> Line<'static> {
        let display: String = if mask {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };

        let mut spans = vec![Span::raw(" "), Span::raw(display)];
        if focused && !self.state.busy {
            spans.push(Span::raw("_"));
        }
        Line::from(spans)
    }

    fn field_style(focused: bool) -> Style {
        if focused {
            styles::FOCUSED_FIELD
        } else {
            Style::default()
                .fg(palette::TEXT_PRIMARY)
                .bg(palette::DEEPEST_BG)
        }
    }
}

impl Widget for AuthDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        dim_background(buf, area);

        let modal_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        clear_area(buf, modal_area);
        render_shadow(buf, modal_area);

        let block = styles::modal_block(" Account ");
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Username label
            Constraint::Length(1), // Username field
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Password label
            Constraint::Length(1), // Password field
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Busy line
            Constraint::Min(1),    // Keybinding hints
        ])
        .split(inner);

        let username_focused = self.state.focus == AuthField::Username;

        Paragraph::new(Span::styled("Username", styles::TEXT_SECONDARY)).render(rows[1], buf);
        Paragraph::new(self.field_line(&self.state.username, username_focused, false))
            .style(Self::field_style(username_focused))
            .render(rows[2], buf);

        Paragraph::new(Span::styled("Password", styles::TEXT_SECONDARY)).render(rows[4], buf);
        Paragraph::new(self.field_line(&self.state.password, !username_focused, true))
            .style(Self::field_style(!username_focused))
            .render(rows[5], buf);

        if self.state.busy {
            Paragraph::new(Span::styled("Signing in...", styles::KEYBINDING))
                .alignment(Alignment::Center)
                .render(rows[7], buf);
        }

        let hints = Line::from(vec![
            Span::styled("[", styles::TEXT_MUTED),
            Span::styled("Enter", styles::KEYBINDING),
            Span::styled("] Log in  ", styles::TEXT_MUTED),
            Span::styled("[", styles::TEXT_MUTED),
            Span::styled("Ctrl+R", styles::KEYBINDING),
            Span::styled("] Register  ", styles::TEXT_MUTED),
            Span::styled("[", styles::TEXT_MUTED),
            Span::styled("Esc", styles::KEYBINDING),
            Span::styled("] Close", styles::TEXT_MUTED),
        ]);
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(rows[8], buf);
    }
}
