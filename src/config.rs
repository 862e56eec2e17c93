//! Application configuration: built-in defaults overlaid with an optional
//! `prodex.toml`, with CLI flags applied last by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;
use crate::key::NameOrdering;

/// Data file location used when neither the config file nor a flag names one.
pub const DEFAULT_DATA_PATH: &str = "data/product_data.txt";

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "prodex.toml";

/// Application-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Flat-text data file loaded at startup.
    pub data: PathBuf,
    /// Name comparison policy for sort and search.
    pub name_ordering: NameOrdering,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data: Option<PathBuf>,
    #[serde(default)]
    search: SearchSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SearchSection {
    name_ordering: Option<NameOrdering>,
}

impl Config {
    /// Built-in defaults: the reference data layout and faithful first-char
    /// name ordering.
    pub fn new_default() -> Self {
        Self { data: PathBuf::from(DEFAULT_DATA_PATH), name_ordering: NameOrdering::default() }
    }

    /// Defaults overlaid with `prodex.toml` from `dir`, when present.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let mut config = Self::new_default();
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            let text = fs::read_to_string(&path)?;
            let file: ConfigFile = toml::from_str(&text)
                .map_err(|err| AppError::Configuration(format!("{}: {err}", path.display())))?;
            if let Some(data) = file.data {
                config.data = data;
            }
            if let Some(name_ordering) = file.search.name_ordering {
                config.name_ordering = name_ordering;
            }
        }
        Ok(config)
    }
}
