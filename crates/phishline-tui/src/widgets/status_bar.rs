//! Bottom hint bar widget
//!
//! Displays the keybindings available in the current UI mode.

use phishline_app::{AppState, UiMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme::styles;

/// Hint bar widget showing mode-specific keybindings
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Push `[key] Label` spans, dimming the key when unavailable
    fn push_hint(spans: &mut Vec<Span<'static>>, key: &'static str, label: String, enabled: bool) {
        let key_style = if enabled {
            styles::KEYBINDING
        } else {
            styles::TEXT_MUTED
        };
        spans.push(Span::styled("[", styles::TEXT_MUTED));
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled("] ", styles::TEXT_MUTED));
        spans.push(Span::styled(label, styles::TEXT_MUTED));
        spans.push(Span::raw("  "));
    }

    fn build_hints(&self) -> Vec<Span<'static>> {
        let mut spans = vec![Span::raw(" ")];

        match self.state.ui_mode {
            UiMode::Normal => {
                let submit_label = if self.state.prediction.busy {
                    "Checking...".to_string()
                } else {
                    "Check Email".to_string()
                };
                Self::push_hint(
                    &mut spans,
                    "Ctrl+S",
                    submit_label,
                    self.state.prediction.can_submit(),
                );
                Self::push_hint(&mut spans, "Ctrl+L", "Account".to_string(), true);
                if self.state.is_authenticated() {
                    Self::push_hint(&mut spans, "Ctrl+X", "Log out".to_string(), true);
                }
                Self::push_hint(&mut spans, "Ctrl+Q", "Quit".to_string(), true);
            }
            UiMode::Auth => {
                let idle = !self.state.auth.busy;
                Self::push_hint(&mut spans, "Tab", "Switch field".to_string(), true);
                Self::push_hint(&mut spans, "Enter", "Log in".to_string(), idle);
                Self::push_hint(&mut spans, "Ctrl+R", "Register".to_string(), idle);
                Self::push_hint(&mut spans, "Esc", "Close".to_string(), true);
                Self::push_hint(&mut spans, "Ctrl+C", "Quit".to_string(), true);
            }
            UiMode::Alert => {
                Self::push_hint(&mut spans, "Enter", "Dismiss".to_string(), true);
                Self::push_hint(&mut spans, "Ctrl+C", "Quit".to_string(), true);
            }
        }

        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Top border acts as a separator from the panels
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(styles::BORDER_INACTIVE);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = Line::from(self.build_hints());
        Paragraph::new(line).render(inner, buf);
    }
}
