//! Regression models over fixed-length windows
//!
//! ## Models
//!
//! - **Linear Regression**: ordinary least squares with optional intercept
//!   and feature normalization

pub mod linear;

pub use linear::LinearRegression;
