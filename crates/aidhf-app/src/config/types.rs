//! Configuration types

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::i18n::DEFAULT_LANGUAGE;

/// API base URL baked in at build time via `AIDHF_API_URL`, else a local
/// development server.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("AIDHF_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Advice endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Base URL; requests go to `{base_url}/advice`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial display language
    #[serde(default = "default_language")]
    pub language: String,

    /// Directory of `<language>.json` files merged over the bundled text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translations_dir: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            translations_dir: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}
