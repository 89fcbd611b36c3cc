//! Absolute error metrics
//!
//! Scores predictions on the test partition.

use window_spi::{ErrorReport, Result, WindowError};

/// Absolute difference per example.
///
/// Returns an empty vector when the inputs differ in length.
pub fn absolute_errors(actual: &[f64], predicted: &[f64]) -> Vec<f64> {
    if actual.len() != predicted.len() {
        return Vec::new();
    }

    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (p - a).abs())
        .collect()
}

/// Build an [`ErrorReport`] from aligned targets and predictions.
///
/// An empty evaluation set is an error, never a zero or NaN report.
///
/// # Example
///
/// ```rust
/// use window_core::utils::metrics::error_report;
///
/// let actual = vec![1.0, 2.0, 3.0, 4.0];
/// let predicted = vec![1.5, 2.0, 2.0, 4.5];
/// let report = error_report(&actual, &predicted).unwrap();
/// assert!((report.average - 0.5).abs() < 1e-12);
/// assert_eq!(report.max, 1.0);
/// ```
pub fn error_report(actual: &[f64], predicted: &[f64]) -> Result<ErrorReport> {
    if actual.len() != predicted.len() {
        return Err(WindowError::DimensionMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }
    if actual.is_empty() {
        return Err(WindowError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let errors = absolute_errors(actual, predicted);
    let average = errors.iter().sum::<f64>() / errors.len() as f64;
    let max = errors.iter().copied().fold(0.0, f64::max);

    if !average.is_finite() || !max.is_finite() {
        return Err(WindowError::NumericalError(
            "non-finite prediction error".to_string(),
        ));
    }

    Ok(ErrorReport::new(average, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_errors() {
        let errors = absolute_errors(&[1.0, -2.0, 3.0], &[1.5, -1.0, 1.0]);
        assert_eq!(errors, vec![0.5, 1.0, 2.0]);
    }

    #[test]
    fn test_absolute_errors_mismatch() {
        assert!(absolute_errors(&[1.0], &[1.0, 2.0]).is_empty());
    }

    #[test]
    fn test_error_report_mean_and_max() {
        let actual = vec![10.0, 11.0, 12.0, 13.0];
        let predicted = vec![10.5, 10.0, 12.0, 15.0];

        let report = error_report(&actual, &predicted).unwrap();
        assert!((report.average - 0.875).abs() < 1e-12);
        assert!((report.max - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_input_is_error_not_nan() {
        let result = error_report(&[], &[]);
        assert_eq!(
            result,
            Err(WindowError::InsufficientData {
                required: 1,
                actual: 0
            })
        );
    }

    #[test]
    fn test_error_report() {
        let report = error_report(&[1.0, 2.0, 3.0], &[1.0, 2.5, 1.0]).unwrap();
        assert!((report.average - 2.5 / 3.0).abs() < 1e-12);
        assert!((report.max - 2.0).abs() < 1e-12);
        assert!(report.max >= report.average && report.average >= 0.0);
    }

    #[test]
    fn test_error_report_perfect_fit() {
        let report = error_report(&[4.0, 5.0], &[4.0, 5.0]).unwrap();
        assert_eq!(report, ErrorReport::new(0.0, 0.0));
    }

    #[test]
    fn test_error_report_empty() {
        assert!(matches!(
            error_report(&[], &[]),
            Err(WindowError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_error_report_mismatch() {
        assert!(matches!(
            error_report(&[1.0, 2.0], &[1.0]),
            Err(WindowError::DimensionMismatch { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_error_report_rejects_nan_prediction() {
        assert!(error_report(&[1.0], &[f64::NAN]).is_err());
    }
}
