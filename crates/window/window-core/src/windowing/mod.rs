//! Sliding-window dataset construction
//!
//! Turns a series into (window, target) pairs: for every position `i` with at
//! least `interval` values of history, the window is `series[i - interval..i]`
//! and the target is `series[i]`. Pairs come out in ascending `i`, which keeps
//! downstream train/test splits chronological.

mod strategies;

pub use strategies::{verify_agreement, WindowStrategy};

use window_spi::{Dataset, Result, WindowError};

/// Build the windowed dataset for `series`.
///
/// Returns an empty dataset when `interval >= series.len()`.
///
/// # Errors
///
/// [`WindowError::InvalidArgument`] when `interval` is zero.
///
/// # Example
///
/// ```rust
/// use window_core::windowing::build;
///
/// let series = vec![1.0, 2.0, 3.0, 4.0];
/// let dataset = build(&series, 2).unwrap();
/// assert_eq!(dataset.windows, vec![vec![1.0, 2.0], vec![2.0, 3.0]]);
/// assert_eq!(dataset.targets, vec![3.0, 4.0]);
/// ```
pub fn build<T: Clone>(series: &[T], interval: usize) -> Result<Dataset<T>> {
    check_interval(interval)?;
    Ok(strategies::slice(series, interval))
}

/// Number of pairs [`build`] yields for a series of `len` values.
pub fn expected_len(len: usize, interval: usize) -> usize {
    len.saturating_sub(interval)
}

pub(crate) fn check_interval(interval: usize) -> Result<()> {
    if interval < 1 {
        return Err(WindowError::invalid_argument(
            "interval",
            "must be at least 1",
        ));
    }
    Ok(())
}
