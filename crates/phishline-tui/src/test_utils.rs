//! Rendering test harness built on ratatui's TestBackend.
//!
//! Widgets draw into an in-memory buffer and assertions read the visible
//! text back out, so rendering tests run without a real terminal.

use phishline_app::{AppState, Session};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// In-memory terminal for widget and full-frame rendering tests.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
    area: Rect,
}

impl TestTerminal {
    /// 80x24, the usual terminal footprint.
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    /// 40x12, for exercising cramped layouts.
    pub fn compact() -> Self {
        Self::with_size(40, 12)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("test backend construction cannot fail");
        Self {
            terminal,
            area: Rect::new(0, 0, width, height),
        }
    }

    /// The whole drawable region.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Draw a single widget into the given region.
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("draw into test backend");
    }

    /// Draw a full frame through a closure, e.g. the top-level view.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("draw into test backend");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// True when `text` appears anywhere on screen.
    ///
    /// Matches within a single row only; text wrapped across rows by the
    /// widget under test will not be found as one string.
    pub fn buffer_contains(&self, text: &str) -> bool {
        self.screen_text().lines().any(|row| row.contains(text))
    }

    /// The visible screen as newline-joined rows.
    pub fn screen_text(&self) -> String {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn clear(&mut self) {
        self.terminal.clear().expect("clear test backend");
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Fresh logged-out state.
pub fn create_test_state() -> AppState {
    AppState::new()
}

/// State seeded with a live session for `username`.
pub fn create_authed_state(username: &str) -> AppState {
    AppState::with_session(Session {
        token: "tok-test".to_string(),
        username: username.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_area_matches_requested_size() {
        let term = TestTerminal::with_size(33, 7);
        assert_eq!(term.area(), Rect::new(0, 0, 33, 7));
    }

    #[test]
    fn test_buffer_contains_finds_rendered_text() {
        let mut term = TestTerminal::compact();
        term.render_widget(Paragraph::new("Check Email"), term.area());

        assert!(term.buffer_contains("Check Email"));
        assert!(!term.buffer_contains("Checking..."));
    }

    #[test]
    fn test_screen_text_has_one_line_per_row() {
        let term = TestTerminal::with_size(6, 3);
        assert_eq!(term.screen_text().lines().count(), 3);
    }

    #[test]
    fn test_clear_wipes_previous_frame() {
        let mut term = TestTerminal::compact();
        term.render_widget(Paragraph::new("stale frame"), term.area());
        assert!(term.buffer_contains("stale frame"));

        term.clear();
        assert!(!term.buffer_contains("stale frame"));
    }

    #[test]
    fn test_state_fixtures() {
        assert!(!create_test_state().is_authenticated());

        let authed = create_authed_state("mallory");
        assert!(authed.is_authenticated());
        assert_eq!(authed.session.username, "mallory");
    }
}
