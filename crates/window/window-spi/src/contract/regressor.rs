//! Regressor trait for window-based models
//!
//! A regressor learns a mapping from a fixed-length window of past values to
//! the value that follows it.

use crate::error::Result;

/// Supervised fit/predict capability over fixed-length windows
///
/// Every window passed to `fit` and `predict` must have the same length.
///
/// # Example
///
/// ```rust,ignore
/// use window_spi::Regressor;
///
/// fn score<R: Regressor>(model: &mut R, x: &[Vec<f64>], y: &[f64]) -> window_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Regressor {
    /// Fit the model on index-aligned windows and targets
    ///
    /// # Arguments
    ///
    /// * `windows` - One feature vector per example
    /// * `targets` - One target per example
    fn fit(&mut self, windows: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one target per window, in input order
    fn predict(&self, windows: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
