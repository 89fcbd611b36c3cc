//! Windowed dataset type.

use serde::{Deserialize, Serialize};

/// Index-aligned windows and targets built from one series.
///
/// `windows[j]` holds the values immediately preceding `targets[j]`, and
/// pairs appear in the order of their position in the source series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dataset<T> {
    /// Predictor windows, each exactly `interval` long
    pub windows: Vec<Vec<T>>,
    /// Value following each window
    pub targets: Vec<T>,
}

impl<T> Dataset<T> {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Create an empty dataset with room for `capacity` pairs.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            windows: Vec::with_capacity(capacity),
            targets: Vec::with_capacity(capacity),
        }
    }

    /// Append one (window, target) pair.
    pub fn push(&mut self, window: Vec<T>, target: T) {
        self.windows.push(window);
        self.targets.push(target);
    }

    /// Number of (window, target) pairs.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True when no pair could be built.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Iterate over (window, target) pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&[T], &T)> {
        self.windows
            .iter()
            .map(Vec::as_slice)
            .zip(self.targets.iter())
    }

    /// Split into (windows, targets).
    pub fn into_parts(self) -> (Vec<Vec<T>>, Vec<T>) {
        (self.windows, self.targets)
    }
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self::new()
    }
}
