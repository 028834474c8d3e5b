//! What `config.toml` deserializes into.

use serde::{Deserialize, Serialize};

/// The whole config file. Every section and field is optional; missing
/// pieces fall back to defaults that point at a local backend.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL of the classification backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Knobs that change how the client behaves rather than where it points.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Keep the session in memory only; nothing is written to disk
    #[serde(default)]
    pub ephemeral: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}
