//! Utility functions shared by regression and evaluation.

pub mod metrics;
pub mod preprocessing;

pub use metrics::{absolute_errors, error_report};
pub use preprocessing::{norm, normalize_rows, Norm};
