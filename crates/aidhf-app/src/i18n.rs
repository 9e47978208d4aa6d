//! Display text lookup
//!
//! Every user-visible string goes through a [`Labels`] implementation. The
//! default [`Catalog`] ships Dutch (`nl-NL`, the default) and English
//! (`en-US`) tables and can load extra or replacement tables from a directory
//! of `<language>.json` files. Nested JSON objects are addressed with dotted
//! keys, e.g. `QUESTIONS.COUGH.LABEL`. A key with no entry renders as itself.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;

use serde_json::Value;

use aidhf_core::prelude::*;

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "nl-NL";

const BUNDLED: [(&str, &str); 2] = [
    ("nl-NL", include_str!("../i18n/nl-NL.json")),
    ("en-US", include_str!("../i18n/en-US.json")),
];

/// Translation service used by every view.
pub trait Labels: Send + fmt::Debug {
    /// Text for `key` in the active language, or `key` itself if missing.
    fn translate(&self, key: &str) -> String;

    /// Switch the active language.
    fn use_language(&mut self, code: &str) -> Result<()>;

    /// Active language code.
    fn language(&self) -> &str;

    /// Every language that can be selected, sorted by code.
    fn available_languages(&self) -> Vec<String>;
}

type Table = HashMap<String, String>;

/// JSON-backed translation tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: BTreeMap<String, Table>,
    active: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::bundled()
    }
}

impl Catalog {
    /// Catalog with the bundled tables, `nl-NL` active.
    pub fn bundled() -> Self {
        let mut tables = BTreeMap::new();
        for (code, raw) in BUNDLED {
            match parse_table(raw) {
                Ok(table) => {
                    tables.insert(code.to_string(), table);
                }
                Err(e) => warn!("Bundled translations for {} are invalid: {}", code, e),
            }
        }

        Self {
            tables,
            active: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Merge every `<language>.json` file in `dir` over the current tables.
    ///
    /// Entries in the files replace bundled entries with the same key; new
    /// language codes become selectable. Nothing is merged unless every file
    /// parses. Returns the number of files loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        let mut staged: Vec<(String, Table)> = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(code) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let raw = std::fs::read_to_string(&path)?;
            let table = parse_table(&raw).map_err(|e| {
                Error::config(format!("Invalid translations in {}: {}", path.display(), e))
            })?;

            debug!("Read {} translations for {} from {}", table.len(), code, path.display());
            staged.push((code.to_string(), table));
        }

        let loaded = staged.len();
        for (code, table) in staged {
            self.tables.entry(code).or_default().extend(table);
        }
        Ok(loaded)
    }
}

impl Labels for Catalog {
    fn translate(&self, key: &str) -> String {
        self.tables
            .get(&self.active)
            .and_then(|table| table.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn use_language(&mut self, code: &str) -> Result<()> {
        if !self.tables.contains_key(code) {
            return Err(Error::unknown_language(code));
        }
        if self.active != code {
            info!("Display language set to {}", code);
            self.active = code.to_string();
        }
        Ok(())
    }

    fn language(&self) -> &str {
        &self.active
    }

    fn available_languages(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

/// Language after `current` in `available`, wrapping around.
pub fn next_language(available: &[String], current: &str) -> Option<String> {
    if available.is_empty() {
        return None;
    }
    let next = available
        .iter()
        .position(|code| code == current)
        .map(|i| (i + 1) % available.len())
        .unwrap_or(0);
    available.get(next).cloned()
}

fn parse_table(raw: &str) -> Result<Table> {
    let value: Value = serde_json::from_str(raw)?;
    let mut table = Table::new();
    flatten("", &value, &mut table);
    Ok(table)
}

fn flatten(prefix: &str, value: &Value, out: &mut Table) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, nested, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Null => {}
        other => {
            out.insert(prefix.to_string(), other.to_string());
        }
    }
}
