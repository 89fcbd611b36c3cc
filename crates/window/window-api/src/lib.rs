//! Sliding-Window Consumer API
//!
//! Configuration types for evaluation sweeps, plus re-exports of the SPI
//! contracts and models so consumers need a single dependency.

pub mod config;

pub use config::{SweepConfig, SweepConfigBuilder};

// Re-export all SPI types
pub use window_spi::{Dataset, ErrorReport, Observation, Regressor, Result, SweepPoint, WindowError};
