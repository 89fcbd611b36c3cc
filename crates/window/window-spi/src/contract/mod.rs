//! Contract traits for model implementations
//!
//! - [`Regressor`]: supervised fit/predict over fixed-length windows

mod regressor;

pub use regressor::Regressor;
