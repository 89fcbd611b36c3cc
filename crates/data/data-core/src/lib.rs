//! Data Source Core
//!
//! Implementations for data sources.

pub mod csv_source;

pub use csv_source::{load_observations, CsvSource};
