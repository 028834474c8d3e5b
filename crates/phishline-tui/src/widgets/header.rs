//! Top bar: app title on the left, session status on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

pub struct HeaderBar<'a> {
    username: Option<&'a str>,
}

impl<'a> HeaderBar<'a> {
    /// `username` is the logged-in user, or `None` when unauthenticated
    pub fn new(username: Option<&'a str>) -> Self {
        Self { username }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let (dot, dot_style) = match self.username {
            Some(_) => ("●", styles::STATUS_GREEN),
            None => ("○", styles::TEXT_MUTED),
        };
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(dot, dot_style),
            Span::raw(" "),
            Span::styled("Phishline", styles::ACCENT_BOLD),
        ]);
        let title_width = title.width() as u16;
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let session = match self.username {
            Some(name) => Line::from(vec![
                Span::styled("Logged in as ", styles::TEXT_MUTED),
                Span::styled(name.to_string(), styles::ACCENT),
                Span::raw(" "),
            ]),
            None => Line::from(Span::styled("Not logged in ", styles::TEXT_MUTED)),
        };
        let session_width = session.width() as u16;

        // Right-aligned, dropped entirely when it would collide with the title
        if title_width + session_width + 2 <= inner.width {
            let x = inner.x + inner.width - session_width;
            buf.set_line(x, inner.y, &session, session_width);
        }
    }
}
