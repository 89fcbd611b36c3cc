//! Evaluation sweep configuration types.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use window_spi::{Result, WindowError};

/// Last year of the training partition in the bundled temperature data.
pub const DEFAULT_CUTOFF: i64 = 2015;
/// Shortest window length tried by a default sweep.
pub const DEFAULT_MIN_INTERVAL: usize = 1;
/// Longest window length tried by a default sweep.
pub const DEFAULT_MAX_INTERVAL: usize = 17;

/// Configuration for an interval sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Rows with `key <= cutoff` train, the rest test
    pub cutoff: i64,
    /// First window length (inclusive, >= 1)
    pub min_interval: usize,
    /// Last window length (inclusive)
    pub max_interval: usize,
    /// Evaluate intervals on the rayon pool
    pub parallel: bool,
    /// Centre and L2-scale regression features before solving
    pub normalize: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            min_interval: DEFAULT_MIN_INTERVAL,
            max_interval: DEFAULT_MAX_INTERVAL,
            parallel: false,
            normalize: true,
        }
    }
}

impl SweepConfig {
    /// Create a sequential sweep over `min_interval..=max_interval`.
    pub fn new(cutoff: i64, min_interval: usize, max_interval: usize) -> Self {
        Self {
            cutoff,
            min_interval,
            max_interval,
            ..Default::default()
        }
    }

    /// Window lengths visited by the sweep, ascending.
    pub fn intervals(&self) -> RangeInclusive<usize> {
        self.min_interval..=self.max_interval
    }

    /// Reject configurations that cannot produce a single window.
    pub fn validate(&self) -> Result<()> {
        if self.min_interval < 1 {
            return Err(WindowError::invalid_argument(
                "min_interval",
                "must be at least 1",
            ));
        }
        if self.min_interval > self.max_interval {
            return Err(WindowError::invalid_argument(
                "max_interval",
                format!(
                    "must not be below min_interval ({} < {})",
                    self.max_interval, self.min_interval
                ),
            ));
        }
        Ok(())
    }
}

/// Builder for SweepConfig.
#[derive(Debug, Default)]
pub struct SweepConfigBuilder {
    cutoff: Option<i64>,
    min_interval: Option<usize>,
    max_interval: Option<usize>,
    parallel: Option<bool>,
    normalize: Option<bool>,
}

impl SweepConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cutoff key.
    pub fn cutoff(mut self, cutoff: i64) -> Self {
        self.cutoff = Some(cutoff);
        self
    }

    /// Set the first window length.
    pub fn min_interval(mut self, interval: usize) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Set the last window length.
    pub fn max_interval(mut self, interval: usize) -> Self {
        self.max_interval = Some(interval);
        self
    }

    /// Run intervals in parallel.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Toggle feature normalization in the regression.
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = Some(normalize);
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<SweepConfig> {
        let defaults = SweepConfig::default();
        let config = SweepConfig {
            cutoff: self.cutoff.unwrap_or(defaults.cutoff),
            min_interval: self.min_interval.unwrap_or(defaults.min_interval),
            max_interval: self.max_interval.unwrap_or(defaults.max_interval),
            parallel: self.parallel.unwrap_or(defaults.parallel),
            normalize: self.normalize.unwrap_or(defaults.normalize),
        };
        config.validate()?;
        Ok(config)
    }
}
