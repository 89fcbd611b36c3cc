//! Labeled series from delimited text files.

use std::fs::File;
use std::io::{BufReader, Read};

use data_api::CsvConfig;
use data_spi::{DataError, DataSource, Observation, Result};

/// Reads a key column and a value column from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvSource {
    config: CsvConfig,
}

impl CsvSource {
    /// Create a new source.
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Configuration in use.
    pub fn config(&self) -> &CsvConfig {
        &self.config
    }

    /// Parse observations from any reader.
    pub fn read_from<R: Read>(&self, reader: R) -> Result<Vec<Observation>> {
        self.config.validate()?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DataError::Csv(e.to_string()))?
            .clone();

        let key_idx = column_index(&headers, &self.config.key_column)?;
        let value_idx = column_index(&headers, &self.config.value_column)?;

        let mut observations = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DataError::Csv(e.to_string()))?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let raw_key = record.get(key_idx).unwrap_or("");
            let raw_value = record.get(value_idx).unwrap_or("");

            let key = parse_key(raw_key).ok_or_else(|| DataError::Parse {
                line,
                column: self.config.key_column.clone(),
                value: raw_key.to_string(),
            })?;
            let value = raw_value
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DataError::Parse {
                    line,
                    column: self.config.value_column.clone(),
                    value: raw_value.to_string(),
                })?;

            observations.push(Observation::new(key, value));
        }

        if observations.is_empty() {
            return Err(DataError::NoData);
        }

        Ok(observations)
    }
}

impl DataSource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Vec<Observation>> {
        let path = &self.config.path;
        let file = File::open(path)
            .map_err(|e| DataError::Io(format!("{}: {}", path.display(), e)))?;

        let observations = self.read_from(BufReader::new(file))?;
        tracing::info!(
            path = %path.display(),
            rows = observations.len(),
            "loaded labeled series"
        );
        Ok(observations)
    }
}

/// Load a labeled series described by `config`.
pub fn load_observations(config: &CsvConfig) -> Result<Vec<Observation>> {
    CsvSource::new(config.clone()).load()
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DataError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
}

/// Integer keys, also accepting whole floats such as `2015.0`.
fn parse_key(raw: &str) -> Option<i64> {
    if let Ok(key) = raw.parse::<i64>() {
        return Some(key);
    }
    let float = raw.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
