//! Data source trait definition.

use crate::error::Result;
use crate::model::Observation;

/// Trait for data sources that produce a labeled series.
///
/// Implementations read rows in file order; the loaded series is treated as
/// read-only for the rest of a run.
pub trait DataSource: Send + Sync {
    /// Data source name.
    fn name(&self) -> &str;

    /// Load every row as an [`Observation`], preserving source order.
    fn load(&self) -> Result<Vec<Observation>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;

    struct Fixed(Vec<Observation>);

    impl DataSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn load(&self) -> Result<Vec<Observation>> {
            if self.0.is_empty() {
                return Err(DataError::NoData);
            }
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_trait_object_load() {
        let source: Box<dyn DataSource> = Box::new(Fixed(vec![Observation::new(2015, 3.2)]));
        assert_eq!(source.name(), "fixed");
        assert_eq!(source.load().unwrap(), vec![Observation::new(2015, 3.2)]);
    }

    #[test]
    fn test_empty_source() {
        let source = Fixed(Vec::new());
        assert!(matches!(source.load(), Err(DataError::NoData)));
    }
}
