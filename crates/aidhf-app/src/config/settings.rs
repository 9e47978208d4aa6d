//! Settings loader for `<config_dir>/aidhf/config.toml`

use std::path::{Path, PathBuf};

use aidhf_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "aidhf";

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings, falling back to defaults if the file is missing or invalid.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from a file the user named explicitly.
///
/// Unlike [`load_settings`], a missing or unparsable file is an error.
pub fn load_settings_strict(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)?;
    let settings = toml::from_str(&content).map_err(|e| {
        Error::config(format!("Failed to parse {}: {}", config_path.display(), e))
    })?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Write a commented default config file if none exists.
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, generate_default_config())
        .map_err(|e| Error::config(format!("Failed to write {}: {}", CONFIG_FILENAME, e)))?;
    info!("Created default {}", config_path.display());
    Ok(())
}

fn generate_default_config() -> String {
    let defaults = Settings::default();
    format!(
        r#"# AID-HF advice client configuration

[api]
# Advice requests are POSTed to {{base_url}}/advice
base_url = "{base_url}"
timeout_secs = {timeout}

[ui]
language = "{language}"     # nl-NL or en-US
# translations_dir = "/path/to/translations"   # extra <language>.json files
"#,
        base_url = defaults.api.base_url,
        timeout = defaults.api.timeout_secs,
        language = defaults.ui.language,
    )
}
