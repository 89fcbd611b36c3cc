//! Labeled series rows.

use serde::{Deserialize, Serialize};

/// One labeled row of a series: a partition key (e.g. year) and a value
/// (e.g. daily mean temperature).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Partition key, compared against the train/test cutoff
    pub key: i64,
    /// Scalar value fed to the windower
    pub value: f64,
}

impl Observation {
    /// Create a new Observation.
    pub fn new(key: i64, value: f64) -> Self {
        Self { key, value }
    }
}

/// Extract the value column.
pub fn values(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|o| o.value).collect()
}

/// Extract the key column.
pub fn keys(observations: &[Observation]) -> Vec<i64> {
    observations.iter().map(|o| o.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns() {
        let rows = vec![
            Observation::new(2014, 3.5),
            Observation::new(2014, 4.0),
            Observation::new(2015, -1.25),
        ];
        assert_eq!(values(&rows), vec![3.5, 4.0, -1.25]);
        assert_eq!(keys(&rows), vec![2014, 2014, 2015]);
    }

    #[test]
    fn test_columns_empty() {
        assert!(values(&[]).is_empty());
        assert!(keys(&[]).is_empty());
    }
}
