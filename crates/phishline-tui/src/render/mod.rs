//! Composes the widgets into a frame.


use phishline_app::{AppState, UiMode};
use phishline_core::prelude::*;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};
use ratatui::Frame;

use crate::theme::{palette, styles};
use crate::{layout, terminal, widgets};

/// Message drawn when a render closure panics
pub const FALLBACK_TEXT: &str = "Whoops! Something went wrong.";

/// Draw the whole screen from the current state. Reads everything,
/// modifies nothing.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Paint the backdrop before any panel lands on it
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let username = if state.is_authenticated() {
        Some(state.session.username.as_str())
    } else {
        None
    };
    frame.render_widget(widgets::HeaderBar::new(username), areas.header);

    let prediction_focused = state.ui_mode == UiMode::Normal;
    frame.render_widget(
        widgets::PredictionPanel::new(&state.prediction).focused(prediction_focused),
        areas.prediction,
    );

    frame.render_widget(widgets::DashboardPanel::new(&state.dashboard), areas.dashboard);

    frame.render_widget(widgets::StatusBar::new(state), areas.status);

    // Modals draw last, over the full frame
    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::Auth => {
            frame.render_widget(widgets::AuthDialog::new(&state.auth), area);
        }
        UiMode::Alert => {
            if let Some(ref message) = state.alert {
                frame.render_widget(widgets::Alert::new(message), area);
            }
        }
    }
}

/// Run a render closure, replacing its output with a fallback message if
/// it panics.
///
/// The closure draws into a scratch buffer that is copied into `buf` only
/// on success, so a mid-render panic cannot leave a half-drawn region.
pub fn render_with_fallback<F>(buf: &mut Buffer, area: Rect, render: F)
where
    F: FnOnce(&mut Buffer),
{
    let mut scratch = Buffer::empty(area);
    let outcome = terminal::with_suppressed_panic_hook(|| {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| render(&mut scratch)))
    });

    match outcome {
        Ok(()) => {
            for y in area.y..area.bottom() {
                for x in area.x..area.right() {
                    if let Some(src) = scratch.cell((x, y)) {
                        if let Some(dst) = buf.cell_mut((x, y)) {
                            *dst = src.clone();
                        }
                    }
                }
            }
        }
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!("Render closure panicked, drawing fallback: {}", msg);

            Paragraph::new(FALLBACK_TEXT)
                .style(styles::STATUS_RED)
                .wrap(Wrap { trim: true })
                .render(area, buf);
        }
    }
}
