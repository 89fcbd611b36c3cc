//! Data error types.

use thiserror::Error;

/// Data source errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// File could not be opened or read
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed delimited input
    #[error("CSV error: {0}")]
    Csv(String),

    /// Requested column is not in the header
    #[error("Column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    /// A field could not be parsed as the expected type
    #[error("Parse error on line {line}, column '{column}': cannot read '{value}'")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    /// No rows were loaded
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let error = DataError::Io("kion10y.csv: No such file or directory".to_string());
        assert_eq!(
            error.to_string(),
            "IO error: kion10y.csv: No such file or directory"
        );
    }

    #[test]
    fn test_missing_column_error() {
        let error = DataError::MissingColumn {
            column: "temp".to_string(),
            available: "year, month, day".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Column 'temp' not found (available: year, month, day)"
        );
    }

    #[test]
    fn test_parse_error() {
        let error = DataError::Parse {
            line: 12,
            column: "year".to_string(),
            value: "20x5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Parse error on line 12, column 'year': cannot read '20x5'"
        );
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(DataError::NoData.to_string(), "No data returned");
    }

    #[test]
    fn test_config_error() {
        let error = DataError::ConfigError("key_column is empty".to_string());
        assert_eq!(error.to_string(), "Configuration error: key_column is empty");
    }
}
