//! Two-slice proportion chart for the dashboard
//!
//! A single horizontal bar split between legitimate and phishing verdicts,
//! with a legend underneath.

use phishline_core::DashboardSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

const BAR_CHAR: char = '█';
const LEGEND_MARKER: &str = "■";

/// Proportion bar of legitimate vs. phishing verdicts
pub struct ProportionChart {
    summary: DashboardSummary,
}

impl ProportionChart {
    pub fn new(summary: DashboardSummary) -> Self {
        Self { summary }
    }

    /// Number of bar cells assigned to the legitimate slice.
    ///
    /// Rounded to the nearest cell, but a non-zero count always gets at
    /// least one cell so small minorities stay visible.
    fn legit_cells(&self, width: u16) -> u16 {
        let legit = self.summary.legit;
        let phishing = self.summary.phishing;
        let total = legit + phishing;
        if total == 0 || width == 0 {
            return 0;
        }

        let exact =
            ((legit as u128 * width as u128 + total as u128 / 2) / total as u128) as u16;

        let mut cells = exact.min(width);
        if legit > 0 {
            cells = cells.max(1);
        }
        if phishing > 0 {
            cells = cells.min(width.saturating_sub(1));
        }
        cells
    }

    fn legit_percent(&self) -> u64 {
        let total = self.summary.legit + self.summary.phishing;
        if total == 0 {
            return 0;
        }
        ((self.summary.legit as u128 * 100 + total as u128 / 2) / total as u128) as u64
    }
}

impl Widget for ProportionChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Bar row
        let legit_cells = self.legit_cells(area.width);
        for x in 0..area.width {
            let color = if x < legit_cells {
                palette::CHART_LEGIT
            } else {
                palette::CHART_PHISHING
            };
            if let Some(cell) = buf.cell_mut((area.x + x, area.y)) {
                cell.set_char(BAR_CHAR)
                    .set_style(ratatui::style::Style::default().fg(color));
            }
        }

        // Legend, below a blank spacer row
        if area.height >= 4 {
            let legit_pct = self.legit_percent();
            let phishing_pct = 100 - legit_pct;

            let legit_line = Line::from(vec![
                Span::styled(
                    LEGEND_MARKER,
                    ratatui::style::Style::default().fg(palette::CHART_LEGIT),
                ),
                Span::styled(
                    format!(" Legitimate  {} ({}%)", self.summary.legit, legit_pct),
                    styles::TEXT_SECONDARY,
                ),
            ]);
            let phishing_line = Line::from(vec![
                Span::styled(
                    LEGEND_MARKER,
                    ratatui::style::Style::default().fg(palette::CHART_PHISHING),
                ),
                Span::styled(
                    format!(" Phishing    {} ({}%)", self.summary.phishing, phishing_pct),
                    styles::TEXT_SECONDARY,
                ),
            ]);

            buf.set_line(area.x, area.y + 2, &legit_line, area.width);
            buf.set_line(area.x, area.y + 3, &phishing_line, area.width);
        }
    }
}
