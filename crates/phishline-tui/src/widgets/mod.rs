//! The widgets that make up the screen, plus the shared modal chrome.

mod alert;
mod auth_dialog;
mod dashboard_panel;
mod header;
pub mod modal_overlay;
mod prediction_panel;
mod proportion_chart;
mod status_bar;

pub use alert::Alert;
pub use auth_dialog::AuthDialog;
pub use dashboard_panel::DashboardPanel;
pub use header::HeaderBar;
pub use prediction_panel::PredictionPanel;
pub use proportion_chart::ProportionChart;
pub use status_bar::StatusBar;
