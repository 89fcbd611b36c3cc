//! Error types for sliding-window operations
//!
//! This module provides the [`WindowError`] enum and [`Result`] type alias
//! shared by windowing, regression and evaluation.

mod window_error;

pub use window_error::{Result, WindowError};
