use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat_widget.json";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_WINDOW_TITLE: &str = "Chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL the session endpoints are appended to.
    pub server_url: String,
    /// Per-request timeout. Requests wait indefinitely when unset or 0.
    pub request_timeout_secs: Option<u64>,
    pub window_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            request_timeout_secs: None,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
        }
    }
}

/// Reads the JSON config at `path`. Any problem with the file leaves the
/// defaults in place; fields missing from the file take their defaults too.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!("No config at {}; using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            log::warn!("Cannot read config {}: {err}; using defaults", path.display());
            return AppConfig::default();
        }
    };

    let config: AppConfig = serde_json::from_str(&content).unwrap_or_else(|err| {
        log::warn!("Invalid config {}: {err}; using defaults", path.display());
        AppConfig::default()
    });

    if config.request_timeout_secs == Some(0) {
        log::warn!(
            "request_timeout_secs is 0 in {}; requests will not time out",
            path.display()
        );
    }
    log::debug!("Loaded config from {}: {config:?}", path.display());
    config
}
