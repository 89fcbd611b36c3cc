//! Evaluation result types.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Absolute prediction error summary for one evaluation run.
///
/// `max >= average >= 0` holds for every report built from real errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Mean absolute error
    pub average: f64,
    /// Largest absolute error
    pub max: f64,
}

impl ErrorReport {
    /// Create a new report.
    pub fn new(average: f64, max: f64) -> Self {
        Self { average, max }
    }
}

/// One step of an interval sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Window length used for this run
    pub interval: usize,
    /// Errors on the test partition
    pub report: ErrorReport,
    /// Wall-clock seconds spent fitting and scoring this interval
    #[serde(default)]
    pub elapsed_secs: f64,
}

impl SweepPoint {
    /// Create a new sweep point with no recorded time.
    pub fn new(interval: usize, report: ErrorReport) -> Self {
        Self {
            interval,
            report,
            elapsed_secs: 0.0,
        }
    }

    /// Attach the time the run took.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_secs = elapsed.as_secs_f64();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweep_point_json_shape() {
        let point = SweepPoint::new(3, ErrorReport::new(1.5, 4.0));
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["interval"], 3);
        assert_eq!(json["report"]["average"], 1.5);
        assert_eq!(json["report"]["max"], 4.0);
        assert_eq!(json["elapsed_secs"], 0.0);
    }

    #[test]
    fn test_with_elapsed() {
        let point = SweepPoint::new(2, ErrorReport::new(1.0, 2.0))
            .with_elapsed(Duration::from_millis(1500));
        assert_eq!(point.elapsed_secs, 1.5);
        assert_eq!(point.interval, 2);
    }

    #[test]
    fn test_elapsed_optional_in_json() {
        let point: SweepPoint =
            serde_json::from_str(r#"{"interval": 4, "report": {"average": 1.0, "max": 2.0}}"#)
                .unwrap();
        assert_eq!(point, SweepPoint::new(4, ErrorReport::new(1.0, 2.0)));
    }
}
