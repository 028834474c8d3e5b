//! Prediction panel widget
//!
//! The email input area with the classification result line underneath.

use phishline_app::state::PredictionState;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Email input panel with result line
pub struct PredictionPanel<'a> {
    state: &'a PredictionState,
    focused: bool,
}

impl<'a> PredictionPanel<'a> {
    pub fn new(state: &'a PredictionState) -> Self {
        Self {
            state,
            focused: false,
        }
    }

    /// Highlight the border and show the input cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn input_lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line> = self
            .state
            .input
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), styles::TEXT_PRIMARY)))
            .collect();

        // Trailing cursor, suppressed while a request is outstanding
        if self.focused && !self.state.busy {
            if let Some(last) = lines.last_mut() {
                last.push_span(Span::styled("_", styles::KEYBINDING));
            }
        }

        lines
    }

    fn footer_line(&self) -> Line<'static> {
        if self.state.busy {
            Line::from(Span::styled("Checking...", styles::KEYBINDING))
        } else if let Some(ref label) = self.state.last_result {
            Line::from(vec![
                Span::styled("Result: ", styles::TEXT_SECONDARY),
                Span::styled(label.clone(), styles::ACCENT_BOLD),
            ])
        } else {
            Line::from(Span::styled(
                "Paste or type an email, then press Ctrl+S.",
                styles::TEXT_MUTED,
            ))
        }
    }
}

impl Widget for PredictionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Email ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Input text
            Constraint::Length(1), // Result / status line
        ])
        .split(inner);

        Paragraph::new(self.input_lines())
            .wrap(Wrap { trim: false })
            .render(chunks[0], buf);

        Paragraph::new(self.footer_line()).render(chunks[1], buf);
    }
}
