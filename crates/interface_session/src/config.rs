//! Session configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_ledger_file() -> String {
    "fatture.json".to_string()
}

fn default_directory_file() -> String {
    "anagrafica.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory holding both store documents
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Ledger document file name
    #[serde(default = "default_ledger_file")]
    pub ledger_file: String,
    /// Directory document file name
    #[serde(default = "default_directory_file")]
    pub directory_file: String,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            ledger_file: default_ledger_file(),
            directory_file: default_directory_file(),
            log_level: default_log_level(),
        }
    }
}

impl SessionConfig {
    /// Loads configuration from `INVOICE_`-prefixed environment variables;
    /// unset variables fall back to the defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("INVOICE"))
            .build()?
            .try_deserialize()
    }

    /// Creates a configuration rooted at a specific data directory
    pub fn with_data_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Full path of the ledger document
    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(&self.ledger_file)
    }

    /// Full path of the directory document
    pub fn directory_path(&self) -> PathBuf {
        self.data_dir.join(&self.directory_file)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
