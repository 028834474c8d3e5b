//! Configuration file parsing for Phishline
//!
//! Settings live in `config.toml` under the per-user config directory
//! (`<config_dir>/phishline/`).

pub mod settings;
pub mod types;

pub use settings::{config_dir, init_config_dir, load_settings, save_settings};
pub use types::*;
