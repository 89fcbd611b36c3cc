//! Chronological train/test partitioning by key.

use window_spi::{model::values, Observation};

/// Rows split around a cutoff key, each side in its original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition<T> {
    /// Rows with `key <= cutoff`
    pub train: Vec<T>,
    /// Rows with `key > cutoff`
    pub test: Vec<T>,
}

impl Partition<Observation> {
    /// Value column of the training rows.
    pub fn train_values(&self) -> Vec<f64> {
        values(&self.train)
    }

    /// Value column of the test rows.
    pub fn test_values(&self) -> Vec<f64> {
        values(&self.test)
    }
}

/// Split `rows` into `key(row) <= cutoff` and `key(row) > cutoff`.
///
/// Relative order is preserved within each side.
pub fn split_by_key<T, K, F>(rows: &[T], key: F, cutoff: &K) -> Partition<T>
where
    T: Clone,
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let (train, test) = rows.iter().cloned().partition(|row| key(row) <= *cutoff);
    Partition { train, test }
}

/// Split observations by their key (e.g. year).
pub fn split_observations(rows: &[Observation], cutoff: i64) -> Partition<Observation> {
    split_by_key(rows, |o| o.key, &cutoff)
}
