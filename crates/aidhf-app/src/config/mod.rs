//! Configuration file parsing for the AID-HF client
//!
//! Supports `<config_dir>/aidhf/config.toml` with `[api]` and `[ui]` tables.
//! Command-line flags override the file; the file overrides built-in defaults.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_strict, CONFIG_FILENAME,
};
pub use types::*;
