//! Phishline - A terminal client for an email classification service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::sync::Arc;

use clap::Parser;
use phishline_api::ApiClient;
use phishline_app::config::{self, Settings};
use phishline_app::{AppState, FileSessionStore, MemorySessionStore, SharedSessionStore};
use phishline_core::prelude::*;

/// Phishline - check emails for phishing from the terminal
#[derive(Parser, Debug)]
#[command(name = "phishline")]
#[command(about = "A terminal client for the Phishline email classification service", long_about = None)]
struct Args {
    /// Base URL of the classification backend (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Keep the session in memory only (nothing written to disk)
    #[arg(long)]
    ephemeral: bool,

    /// Log filter, e.g. `debug` or `phishline_api=trace` (overrides PHISHLINE_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns the terminal)
    phishline_core::logging::init(args.log_level.as_deref())?;

    // Load configuration, creating a commented default file on first run
    let settings = match config::config_dir() {
        Some(dir) => {
            if let Err(e) = config::init_config_dir(&dir) {
                warn!("Could not initialize config dir: {}", e);
            }
            config::load_settings(&dir)
        }
        None => {
            warn!("No config directory on this platform, using defaults");
            Settings::default()
        }
    };

    let base_url = args
        .api_url
        .unwrap_or_else(|| settings.api.base_url.clone());
    info!("Backend: {}", base_url);

    let api = ApiClient::new(&base_url)?;

    // Session storage: a file under the config dir, or memory-only when
    // requested
    let store: SharedSessionStore = if args.ephemeral || settings.behavior.ephemeral {
        info!("Ephemeral mode: session will not be persisted");
        Arc::new(MemorySessionStore::new())
    } else {
        Arc::new(FileSessionStore::standard()?)
    };

    // Restore any stored session before the first frame
    let state = AppState::with_session(store.load());

    let result = phishline_tui::run(state, api, store).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("Phishline exiting");
    result
}
