//! Sliding-Window Service Provider Interface
//!
//! Defines the contracts, data models and error types shared by every
//! sliding-window forecasting component:
//!
//! - [`Regressor`]: fit/predict capability over fixed-length windows
//! - [`Dataset`]: index-aligned windows and targets
//! - [`Observation`]: one labeled row of a series
//! - [`ErrorReport`] / [`SweepPoint`]: evaluation results
//! - [`WindowError`]: standardized error type

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Regressor;
pub use error::{Result, WindowError};
pub use model::{Dataset, ErrorReport, Observation, SweepPoint};
