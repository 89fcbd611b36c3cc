//! Equivalent windowing strategies for benchmarking
//!
//! All strategies implement the same contract as [`super::build`] and must
//! produce identical datasets. Production code goes through `build`, which
//! uses [`WindowStrategy::Slice`]; the others exist so the benchmark harness
//! can compare them.

use std::fmt;
use std::str::FromStr;

use window_spi::{Dataset, Result, WindowError};

use super::{check_interval, expected_len};

/// Construction strategy for a windowed dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowStrategy {
    /// Outer loop over every position, inner loop copying each element
    IndexLoop,
    /// Loop over valid positions, copying one slice per window
    Slice,
    /// `slice::windows` adaptor over `interval + 1` wide runs
    Iterator,
}

impl WindowStrategy {
    /// Every strategy, in benchmark order.
    pub const ALL: [WindowStrategy; 3] = [
        WindowStrategy::IndexLoop,
        WindowStrategy::Slice,
        WindowStrategy::Iterator,
    ];

    /// Short name used in benchmark output.
    pub fn name(&self) -> &'static str {
        match self {
            WindowStrategy::IndexLoop => "index_loop",
            WindowStrategy::Slice => "slice",
            WindowStrategy::Iterator => "iterator",
        }
    }

    /// Build the dataset with this strategy.
    pub fn build<T: Clone>(&self, series: &[T], interval: usize) -> Result<Dataset<T>> {
        check_interval(interval)?;
        Ok(match self {
            WindowStrategy::IndexLoop => index_loop(series, interval),
            WindowStrategy::Slice => slice(series, interval),
            WindowStrategy::Iterator => iterator(series, interval),
        })
    }
}

impl fmt::Display for WindowStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowStrategy {
    type Err = WindowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "index_loop" | "loop" => Ok(WindowStrategy::IndexLoop),
            "slice" => Ok(WindowStrategy::Slice),
            "iterator" | "iter" => Ok(WindowStrategy::Iterator),
            other => Err(WindowError::invalid_argument(
                "strategy",
                format!("unknown strategy '{}'. Valid options: index_loop, slice, iterator", other),
            )),
        }
    }
}

/// Build with every strategy and confirm the results are identical.
///
/// Returns the shared dataset, or `NumericalError` naming the first strategy
/// that disagrees with [`WindowStrategy::Slice`].
pub fn verify_agreement<T: Clone + PartialEq>(series: &[T], interval: usize) -> Result<Dataset<T>> {
    let reference = WindowStrategy::Slice.build(series, interval)?;
    for strategy in WindowStrategy::ALL {
        if strategy == WindowStrategy::Slice {
            continue;
        }
        if strategy.build(series, interval)? != reference {
            return Err(WindowError::NumericalError(format!(
                "strategy '{}' disagrees with 'slice' at interval {}",
                strategy, interval
            )));
        }
    }
    Ok(reference)
}

pub(super) fn index_loop<T: Clone>(series: &[T], interval: usize) -> Dataset<T> {
    let mut dataset = Dataset::with_capacity(expected_len(series.len(), interval));

    for i in 0..series.len() {
        if i < interval {
            continue;
        }
        let mut window = Vec::with_capacity(interval);
        for p in 0..interval {
            window.push(series[i + p - interval].clone());
        }
        dataset.push(window, series[i].clone());
    }

    dataset
}

pub(super) fn slice<T: Clone>(series: &[T], interval: usize) -> Dataset<T> {
    let mut dataset = Dataset::with_capacity(expected_len(series.len(), interval));

    for i in interval..series.len() {
        dataset.push(series[i - interval..i].to_vec(), series[i].clone());
    }

    dataset
}

pub(super) fn iterator<T: Clone>(series: &[T], interval: usize) -> Dataset<T> {
    if interval >= series.len() {
        return Dataset::new();
    }

    let (windows, targets) = series
        .windows(interval + 1)
        .map(|run| (run[..interval].to_vec(), run[interval].clone()))
        .unzip();

    Dataset { windows, targets }
}
