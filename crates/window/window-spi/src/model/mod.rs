//! Data models for windowed datasets and evaluation results.

mod dataset;
mod observation;
mod report;

pub use dataset::Dataset;
pub use observation::{keys, values, Observation};
pub use report::{ErrorReport, SweepPoint};
