//! Sliding-Window Core Implementations
//!
//! This crate provides the implementations behind the sliding-window
//! forecasting contracts, organized by concern:
//!
//! - [`windowing`]: (window, target) dataset construction
//! - [`regression`]: ordinary least squares over windows
//! - [`evaluation`]: train/test partitioning, scoring and interval sweeps
//! - [`utils`]: error metrics and feature normalization
//!
//! ## Example
//!
//! ```rust
//! use window_core::prelude::*;
//!
//! let series: Vec<Observation> = (0..40)
//!     .map(|i| Observation::new(2000 + i / 10, 10.0 + i as f64))
//!     .collect();
//! let evaluator = Evaluator::linear(true);
//! let report = evaluator.run(&series, 2002, 3).unwrap();
//! assert!(report.max >= report.average);
//! ```

pub mod evaluation;
pub mod regression;
pub mod utils;
pub mod windowing;

// Re-export from SPI
pub use window_spi::{Dataset, ErrorReport, Observation, Regressor, Result, SweepPoint, WindowError};

pub use evaluation::{split_by_key, split_observations, Evaluator, Partition};
pub use regression::LinearRegression;
pub use windowing::{build, WindowStrategy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::evaluation::{split_observations, Evaluator, Partition};
    pub use crate::regression::LinearRegression;
    pub use crate::windowing::build;
    pub use window_api::SweepConfig;
    pub use window_spi::{
        Dataset, ErrorReport, Observation, Regressor, Result, SweepPoint, WindowError,
    };
}
