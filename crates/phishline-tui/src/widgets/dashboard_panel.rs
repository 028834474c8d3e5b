//! Dashboard panel widget
//!
//! Shows the aggregate verdict counts for the logged-in user, or the
//! appropriate placeholder for each phase of the fetch lifecycle.

use phishline_app::state::DashboardState;
use phishline_app::DashboardPhase;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::ProportionChart;
use crate::render::render_with_fallback;
use crate::theme::styles;

/// Dashboard panel rendering from the fetch state machine
pub struct DashboardPanel<'a> {
    state: &'a DashboardState,
}

impl<'a> DashboardPanel<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self { state }
    }

    fn placeholder(&self) -> Option<&'static str> {
        match self.state.phase {
            DashboardPhase::LoggedOut | DashboardPhase::Unauthorized => {
                Some("Please log in to see your stats.")
            }
            DashboardPhase::Loading => Some("Loading chart..."),
            DashboardPhase::Error => Some("Failed to load dashboard data."),
            DashboardPhase::Ready(_) => None,
        }
    }
}

impl Widget for DashboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Dashboard ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if let Some(text) = self.placeholder() {
            let style = match self.state.phase {
                DashboardPhase::Error => styles::STATUS_RED,
                _ => styles::TEXT_MUTED,
            };
            Paragraph::new(Line::from(Span::styled(text, style))).render(inner, buf);
            return;
        }

        let Some(summary) = self.state.summary().copied() else {
            return;
        };

        // Total line uses the raw backend total, never legit + phishing
        let total_line = Line::from(vec![
            Span::styled("Total Emails Checked: ", styles::TEXT_SECONDARY),
            Span::styled(summary.total.to_string(), styles::ACCENT_BOLD),
        ]);
        buf.set_line(inner.x, inner.y, &total_line, inner.width);

        if inner.height < 3 {
            return;
        }

        let body = Rect {
            x: inner.x,
            y: inner.y + 2,
            width: inner.width,
            height: inner.height - 2,
        };

        if summary.has_verdicts() {
            render_with_fallback(buf, body, |scratch| {
                ProportionChart::new(summary).render(body, scratch);
            });
        } else {
            Paragraph::new(Line::from(Span::styled("No data yet.", styles::TEXT_MUTED)))
                .render(body, buf);
        }
    }
}
