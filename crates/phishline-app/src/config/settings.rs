//! Reads and writes `config.toml`.

use super::types::Settings;
use phishline_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "phishline";

/// Starter file written on first run. Kept as literal text so the
/// comments survive; a serialized `Settings` would strip them.
const DEFAULT_CONFIG: &str = r#"# Phishline Configuration

[api]
# Base URL of the classification backend
base_url = "http://127.0.0.1:5000"

[behavior]
# Keep the session in memory only (nothing written to disk)
ephemeral = false
"#;

/// The per-user configuration directory (`<config_dir>/phishline/`).
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR))
}

/// Read settings from `<dir>/config.toml`, falling back to defaults on
/// a missing or unparseable file. Never an error: bad config must not
/// keep the app from starting.
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(CONFIG_FILENAME);

    if !path.exists() {
        debug!("No config at {:?}; running on defaults", path);
        return Settings::default();
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read {:?}: {}", path, e);
            return Settings::default();
        }
    };

    match toml::from_str(&content) {
        Ok(settings) => {
            debug!("Settings loaded from {:?}", path);
            settings
        }
        Err(e) => {
            warn!("Could not parse {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Create the config directory and seed a commented starter file.
/// An existing config.toml is left untouched.
pub fn init_config_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::config(format!("create {:?}: {}", dir, e)))?;

    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        return Ok(());
    }

    std::fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("write {:?}: {}", path, e)))?;
    info!("Wrote starter config at {:?}", path);
    Ok(())
}

/// Write settings to `<dir>/config.toml` through a staging file, so a
/// crash mid-write cannot leave a truncated config behind.
pub fn save_settings(dir: &Path, settings: &Settings) -> Result<()> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::config(format!("create {:?}: {}", dir, e)))?;

    let path = dir.join(CONFIG_FILENAME);
    let staging = dir.join(".config.toml.tmp");

    let body = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("serialize settings: {}", e)))?;

    std::fs::write(&staging, format!("# Phishline Configuration\n\n{}", body))
        .map_err(|e| Error::config(format!("write {:?}: {}", staging, e)))?;
    std::fs::rename(&staging, &path)
        .map_err(|e| Error::config(format!("install {:?}: {}", path, e)))?;

    info!("Settings written to {:?}", path);
    Ok(())
}
