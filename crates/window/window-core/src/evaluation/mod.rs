//! Windowed train/test evaluation
//!
//! Splits a labeled series by a cutoff key, windows both partitions, fits a
//! model on the training windows and scores it on the test windows.

mod evaluator;
mod partition;

pub use evaluator::{Evaluator, LinearFactory};
pub use partition::{split_by_key, split_observations, Partition};
