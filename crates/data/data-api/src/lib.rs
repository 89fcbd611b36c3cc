//! Data Source Consumer API
//!
//! Configuration types for loading labeled series.

pub mod config;

pub use config::{CsvConfig, CsvConfigBuilder};
