//! Sliding-window error types
//!
//! Defines the standardized error type for windowing, fitting and evaluation.

use thiserror::Error;

/// Result type alias for sliding-window operations
pub type Result<T> = std::result::Result<T, WindowError>;

/// Errors that can occur while building windows, fitting models or scoring them
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// Malformed argument, rejected before any work begins
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Not enough history to produce a usable dataset
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Model has not been fitted yet
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Windows and targets (or features and coefficients) disagree in size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl WindowError {
    /// Shorthand for an [`WindowError::InvalidArgument`].
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        WindowError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
