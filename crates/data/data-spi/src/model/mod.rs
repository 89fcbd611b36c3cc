//! Data models for labeled series.
//!
//! Rows are [`Observation`]s shared with the window domain.

pub use window_spi::model::{keys, values, Observation};

/// Smallest and largest key in the series, or `None` when empty.
pub fn key_range(observations: &[Observation]) -> Option<(i64, i64)> {
    let first = observations.first()?.key;
    Some(
        observations
            .iter()
            .fold((first, first), |(lo, hi), o| (lo.min(o.key), hi.max(o.key))),
    )
}
