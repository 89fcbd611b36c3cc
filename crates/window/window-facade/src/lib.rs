//! Sliding-Window Facade
//!
//! High-level API for sliding-window forecasting. Re-exports all public types
//! from the window stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use window_facade::prelude::*;
//!
//! let series: Vec<Observation> = (0..50)
//!     .map(|i| Observation::new(2000 + i / 25, 20.0 - 0.1 * i as f64))
//!     .collect();
//! let points = Evaluator::linear(true)
//!     .sweep(&series, &SweepConfig::new(2000, 1, 3))
//!     .unwrap();
//! assert_eq!(points.len(), 3);
//! ```

// Re-export everything from core (includes implementations)
pub use window_core::*;

// Configuration types live in the API crate
pub use window_api::{config, SweepConfig, SweepConfigBuilder};

// Explicit re-exports for documentation
pub use window_core::prelude;
pub use window_spi::{contract, error, model};
