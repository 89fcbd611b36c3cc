//! Data Source Service Provider Interface
//!
//! Defines traits and types for loading labeled series.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{keys, key_range, values, Observation};
