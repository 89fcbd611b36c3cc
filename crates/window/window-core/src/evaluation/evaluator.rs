//! Train/test evaluation of window-based regressors.

use bench_harness::timed;
use rayon::prelude::*;
use window_api::SweepConfig;
use window_spi::{ErrorReport, Observation, Regressor, Result, SweepPoint, WindowError};

use super::partition::split_observations;
use crate::regression::LinearRegression;
use crate::utils::metrics::error_report;
use crate::windowing;

/// Scores a regressor on a chronological train/test split.
///
/// A fresh model is created from `factory` for every run, so runs never share
/// state and a sweep can evaluate intervals independently.
///
/// # Example
///
/// ```rust
/// use window_core::evaluation::Evaluator;
/// use window_core::regression::LinearRegression;
/// use window_core::Observation;
///
/// let series: Vec<Observation> = (0..60)
///     .map(|i| Observation::new(2010 + i / 20, (i as f64 * 0.3).sin()))
///     .collect();
///
/// let evaluator = Evaluator::new(|| Ok(LinearRegression::new()));
/// let report = evaluator.run(&series, 2011, 4).unwrap();
/// assert!(report.max >= report.average && report.average >= 0.0);
/// ```
pub struct Evaluator<F> {
    factory: F,
}

/// Boxed factory producing ordinary least squares models.
pub type LinearFactory = Box<dyn Fn() -> Result<LinearRegression> + Send + Sync>;

impl Evaluator<LinearFactory> {
    /// Evaluator backed by ordinary least squares.
    pub fn linear(normalize: bool) -> Self {
        let factory: LinearFactory =
            Box::new(move || Ok(LinearRegression::new().with_normalize(normalize)));
        Evaluator::new(factory)
    }
}

impl<F, R> Evaluator<F>
where
    F: Fn() -> Result<R>,
    R: Regressor,
{
    /// Create an evaluator from a model factory.
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Fit on rows with `key <= cutoff`, score on rows with `key > cutoff`.
    ///
    /// # Errors
    ///
    /// - [`WindowError::InvalidArgument`] when `interval` is zero
    /// - [`WindowError::InsufficientData`] when either partition has no more
    ///   than `interval` rows, so no window can be built
    /// - any error raised by the model
    pub fn run(&self, series: &[Observation], cutoff: i64, interval: usize) -> Result<ErrorReport> {
        if interval < 1 {
            return Err(WindowError::invalid_argument(
                "interval",
                "must be at least 1",
            ));
        }

        let partition = split_observations(series, cutoff);
        let train_values = partition.train_values();
        let test_values = partition.test_values();

        let train = windowing::build(&train_values, interval)?;
        if train.is_empty() {
            return Err(WindowError::InsufficientData {
                required: interval + 1,
                actual: train_values.len(),
            });
        }

        let test = windowing::build(&test_values, interval)?;
        if test.is_empty() {
            return Err(WindowError::InsufficientData {
                required: interval + 1,
                actual: test_values.len(),
            });
        }

        tracing::debug!(
            interval,
            train = train.len(),
            test = test.len(),
            "fitting window model"
        );

        let mut model = (self.factory)()?;
        model.fit(&train.windows, &train.targets)?;
        let predicted = model.predict(&test.windows)?;

        error_report(&test.targets, &predicted)
    }

    /// Run once per window length in `config.intervals()`.
    ///
    /// Points come back in ascending interval order whether or not the sweep
    /// runs in parallel, each carrying its own wall-clock time. The first
    /// failing interval aborts the sweep.
    pub fn sweep(&self, series: &[Observation], config: &SweepConfig) -> Result<Vec<SweepPoint>>
    where
        F: Sync,
    {
        config.validate()?;
        tracing::info!(
            rows = series.len(),
            cutoff = config.cutoff,
            min_interval = config.min_interval,
            max_interval = config.max_interval,
            parallel = config.parallel,
            "starting interval sweep"
        );

        let evaluate = |interval: usize| -> Result<SweepPoint> {
            let run = timed(format!("interval {}", interval), || {
                self.run(series, config.cutoff, interval)
            });
            let elapsed = run.elapsed;
            tracing::debug!(interval, elapsed_secs = elapsed.as_secs_f64(), "interval scored");
            Ok(SweepPoint::new(interval, run.into_value()?).with_elapsed(elapsed))
        };

        let points = if config.parallel {
            config
                .intervals()
                .into_par_iter()
                .map(evaluate)
                .collect::<Result<Vec<_>>>()?
        } else {
            config
                .intervals()
                .map(evaluate)
                .collect::<Result<Vec<_>>>()?
        };

        tracing::info!(points = points.len(), "interval sweep complete");
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Predicts the most recent value in each window
    struct Persistence {
        fitted: bool,
    }

    impl Regressor for Persistence {
        fn fit(&mut self, _windows: &[Vec<f64>], _targets: &[f64]) -> Result<()> {
            self.fitted = true;
            Ok(())
        }

        fn predict(&self, windows: &[Vec<f64>]) -> Result<Vec<f64>> {
            if !self.fitted {
                return Err(WindowError::NotFitted);
            }
            Ok(windows.iter().map(|w| w[w.len() - 1]).collect())
        }

        fn is_fitted(&self) -> bool {
            self.fitted
        }
    }

    fn yearly(values_per_year: usize, years: i64) -> Vec<Observation> {
        (0..years)
            .flat_map(|y| {
                (0..values_per_year).map(move |d| {
                    let t = (y as usize * values_per_year + d) as f64;
                    Observation::new(2000 + y, 10.0 + 8.0 * (t * 0.25).sin())
                })
            })
            .collect()
    }

    #[test]
    fn test_persistence_errors_by_hand() {
        let series = vec![
            Observation::new(1, 1.0),
            Observation::new(1, 2.0),
            Observation::new(1, 3.0),
            Observation::new(2, 10.0),
            Observation::new(2, 12.0),
            Observation::new(2, 11.0),
            Observation::new(2, 15.0),
        ];
        let evaluator = Evaluator::new(|| Ok(Persistence { fitted: false }));
        let report = evaluator.run(&series, 1, 1).unwrap();

        // Test targets 12, 11, 15 predicted by 10, 12, 11
        assert!((report.average - (2.0 + 1.0 + 4.0) / 3.0).abs() < 1e-12);
        assert!((report.max - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_model_on_exact_recurrence() {
        // x[t] = 2 x[t-1] - x[t-2] is an arithmetic progression
        let series: Vec<Observation> = (0..30)
            .map(|i| Observation::new(if i < 20 { 1 } else { 2 }, 3.0 + 0.5 * i as f64))
            .collect();
        let report = Evaluator::linear(false).run(&series, 1, 2).unwrap();
        assert!(report.max < 1e-8);
    }

    #[test]
    fn test_report_ordering_invariant() {
        let series = yearly(40, 4);
        let evaluator = Evaluator::linear(true);
        for interval in 1..=8 {
            let report = evaluator.run(&series, 2002, interval).unwrap();
            assert!(report.average >= 0.0);
            assert!(report.max >= report.average);
        }
    }

    #[test]
    fn test_zero_interval_rejected() {
        let series = yearly(10, 2);
        let result = Evaluator::linear(false).run(&series, 2000, 0);
        assert!(matches!(result, Err(WindowError::InvalidArgument { .. })));
    }

    #[test]
    fn test_empty_test_partition_is_insufficient() {
        let series = yearly(10, 3);
        // Test partition (2002) has exactly 10 rows
        let result = Evaluator::linear(false).run(&series, 2001, 10);
        assert_eq!(
            result,
            Err(WindowError::InsufficientData {
                required: 11,
                actual: 10
            })
        );
    }

    #[test]
    fn test_cutoff_after_last_key_is_insufficient() {
        let series = yearly(10, 3);
        let result = Evaluator::linear(false).run(&series, 2100, 1);
        assert!(matches!(result, Err(WindowError::InsufficientData { actual: 0, .. })));
    }

    #[test]
    fn test_empty_train_partition_is_insufficient() {
        let series = yearly(10, 3);
        let result = Evaluator::linear(false).run(&series, 1990, 2);
        assert!(matches!(result, Err(WindowError::InsufficientData { .. })));
    }

    #[test]
    fn test_factory_error_propagates() {
        let series = yearly(10, 3);
        let evaluator = Evaluator::new(|| -> Result<Persistence> {
            Err(WindowError::NumericalError("no model".to_string()))
        });
        assert!(matches!(
            evaluator.run(&series, 2000, 1),
            Err(WindowError::NumericalError(_))
        ));
    }

    #[test]
    fn test_sweep_order_and_length() {
        let series = yearly(30, 4);
        let config = SweepConfig::new(2002, 1, 6);
        let points = Evaluator::linear(true).sweep(&series, &config).unwrap();

        let intervals: Vec<usize> = points.iter().map(|p| p.interval).collect();
        assert_eq!(intervals, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parallel_sweep_matches_sequential() {
        let series = yearly(30, 4);
        let sequential = SweepConfig::new(2002, 1, 8);
        let parallel = SweepConfig {
            parallel: true,
            ..sequential.clone()
        };

        let evaluator = Evaluator::linear(true);
        let a = evaluator.sweep(&series, &sequential).unwrap();
        let b = evaluator.sweep(&series, &parallel).unwrap();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.interval, y.interval);
            assert_eq!(x.report, y.report);
        }
    }

    #[test]
    fn test_linear_evaluators_share_a_type() {
        let series = yearly(20, 3);
        let evaluators: Vec<Evaluator<LinearFactory>> =
            vec![Evaluator::linear(true), Evaluator::linear(false)];

        let reports: Vec<ErrorReport> = evaluators
            .iter()
            .map(|e| e.run(&series, 2001, 3).unwrap())
            .collect();
        assert!((reports[0].average - reports[1].average).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_records_interval_time() {
        let series = yearly(30, 4);
        let config = SweepConfig::new(2002, 1, 4);
        let points = Evaluator::linear(true).sweep(&series, &config).unwrap();

        assert!(points.iter().all(|p| p.elapsed_secs > 0.0));
        assert!(points.iter().all(|p| p.elapsed_secs.is_finite()));
    }

    #[test]
    fn test_sweep_aborts_on_first_failure() {
        let series = yearly(5, 3);
        // Test partition has 5 rows, interval 5 cannot be windowed
        let config = SweepConfig::new(2001, 1, 6);
        let result = Evaluator::linear(false).sweep(&series, &config);
        assert!(matches!(result, Err(WindowError::InsufficientData { .. })));
    }

    #[test]
    fn test_sweep_rejects_invalid_config() {
        let series = yearly(5, 3);
        let config = SweepConfig::new(2001, 0, 3);
        assert!(Evaluator::linear(false).sweep(&series, &config).is_err());
    }
}
