// src/config.rs
//
// Runtime configuration, read from the environment at startup.

use std::path::PathBuf;

use crate::storage::default_data_file;

/// Overrides the catalog file location
pub const DATA_FILE_ENV: &str = "DIARIO_CULTURAL_DATA";

/// `0` or `false` writes compact JSON
pub const PRETTY_JSON_ENV: &str = "DIARIO_CULTURAL_PRETTY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file (JSON)
    pub data_file: PathBuf,

    /// Pretty-print the catalog file
    pub pretty_json: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_file = std::env::var_os(DATA_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);

        let pretty_json = std::env::var(PRETTY_JSON_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Self {
            data_file,
            pretty_json,
        }
    }

    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            pretty_json: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_data_file(default_data_file())
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
