//! CSV source configuration types.

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Daily temperature file read when no path is given.
pub const DEFAULT_PATH: &str = "kion10y.csv";
/// Year column of the default file.
pub const DEFAULT_KEY_COLUMN: &str = "年";
/// Mean temperature column of the default file.
pub const DEFAULT_VALUE_COLUMN: &str = "気温";

/// Configuration for loading a labeled series from a delimited file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    /// Input file
    pub path: PathBuf,
    /// Header of the partition key column (e.g. year)
    pub key_column: String,
    /// Header of the value column (e.g. temperature)
    pub value_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            value_column: DEFAULT_VALUE_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl CsvConfig {
    /// Create a configuration for `path` with explicit column names.
    pub fn new(path: impl Into<PathBuf>, key_column: &str, value_column: &str) -> Self {
        Self {
            path: path.into(),
            key_column: key_column.to_string(),
            value_column: value_column.to_string(),
            ..Default::default()
        }
    }

    /// Create a configuration for `path` with the default column names.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Reject empty column names.
    pub fn validate(&self) -> Result<()> {
        if self.key_column.trim().is_empty() {
            return Err(DataError::ConfigError("key_column is empty".to_string()));
        }
        if self.value_column.trim().is_empty() {
            return Err(DataError::ConfigError("value_column is empty".to_string()));
        }
        Ok(())
    }
}

/// Builder for CsvConfig.
#[derive(Debug, Default)]
pub struct CsvConfigBuilder {
    path: Option<PathBuf>,
    key_column: Option<String>,
    value_column: Option<String>,
    delimiter: Option<u8>,
}

impl CsvConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the key column header.
    pub fn key_column(mut self, column: &str) -> Self {
        self.key_column = Some(column.to_string());
        self
    }

    /// Set the value column header.
    pub fn value_column(mut self, column: &str) -> Self {
        self.value_column = Some(column.to_string());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<CsvConfig> {
        let defaults = CsvConfig::default();
        let config = CsvConfig {
            path: self.path.unwrap_or(defaults.path),
            key_column: self.key_column.unwrap_or(defaults.key_column),
            value_column: self.value_column.unwrap_or(defaults.value_column),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
        };
        config.validate()?;
        Ok(config)
    }
}
