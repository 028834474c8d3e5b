//! File logging for the whole workspace.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Set up daily-rolling file logging under the local data dir.
///
/// The terminal belongs to the TUI, so nothing is ever written to
/// stdout/stderr. Filter precedence: `filter` (the `--log-level` flag)
/// beats the `PHISHLINE_LOG` environment variable beats the built-in
/// default of `info` for the workspace crates.
///
/// # Examples
/// ```bash
/// PHISHLINE_LOG=debug phishline
/// phishline --log-level trace
/// ```
pub fn init(filter: Option<&str>) -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "phishline.log");

    let env_filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_env("PHISHLINE_LOG").unwrap_or_else(|_| {
            EnvFilter::new(
                "phishline=info,phishline_core=info,phishline_api=info,\
                 phishline_app=info,phishline_tui=info,warn",
            )
        }),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Phishline starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phishline")
        .join("logs")
}
