//! Data Source Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all data source functionality:
//! - `data_spi` - Traits, types, and errors for data sources
//! - `data_api` - Configuration types and builders
//! - `data_core` - Implementations (CSV files)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{load_observations, values, CsvConfig};
//!
//! let config = CsvConfig::with_path("kion10y.csv");
//! let observations = load_observations(&config).unwrap();
//!
//! let temperatures = values(&observations);
//! println!("Got {} daily readings", temperatures.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
