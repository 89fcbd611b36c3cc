//! Linear Regression over windows
//!
//! Ordinary least squares: each window is a feature vector, the target is the
//! value that follows it. Fits y = intercept + w · x.
//!
//! The system is solved through a singular value decomposition, so collinear
//! windows (e.g. a constant series) still produce the minimum-norm solution
//! instead of failing.
//!
//! ## When to Use
//!
//! - Next-step prediction from the previous N observations
//! - Quick baseline model
//! - When interpretability is important

use nalgebra::{DMatrix, DVector};
use window_spi::{Regressor, Result, WindowError};

use crate::utils::preprocessing::{norm, Norm};

/// Singular values below `RCOND * largest` are treated as zero.
const RCOND: f64 = 1e-10;

/// Linear Regression model over fixed-length windows
///
/// # Example
///
/// ```rust
/// use window_core::regression::LinearRegression;
/// use window_core::Regressor;
///
/// // y = 1 + 2a - b
/// let x = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![2.0, 1.0], vec![3.0, 5.0]];
/// let y: Vec<f64> = x.iter().map(|w| 1.0 + 2.0 * w[0] - w[1]).collect();
///
/// let mut model = LinearRegression::new();
/// model.fit(&x, &y).unwrap();
/// let predicted = model.predict(&[vec![4.0, 4.0]]).unwrap();
/// assert!((predicted[0] - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression {
    /// One weight per window position
    coefficients: Vec<f64>,
    /// Y-intercept
    intercept: f64,
    /// Whether to fit an intercept
    fit_intercept: bool,
    /// Centre and L2-scale features before solving
    normalize: bool,
    /// R-squared on the training data
    r_squared: f64,
    /// Whether model has been fitted
    fitted: bool,
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegression {
    /// Create a new model with an intercept and no feature normalization
    pub fn new() -> Self {
        Self {
            coefficients: Vec::new(),
            intercept: 0.0,
            fit_intercept: true,
            normalize: false,
            r_squared: 0.0,
            fitted: false,
        }
    }

    /// Toggle the intercept term
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Centre each feature column and divide it by its L2 norm before solving.
    ///
    /// Only applies when an intercept is fitted. Coefficients are mapped back
    /// to the original scale, so predictions are unchanged up to rounding.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Get the weights, one per window position (oldest first)
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Get the intercept
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Get R-squared on the training data
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    fn predict_one(&self, window: &[f64]) -> f64 {
        self.intercept
            + window
                .iter()
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }
}

/// Check every window has the same width and return it.
fn feature_width(windows: &[Vec<f64>]) -> Result<usize> {
    let width = windows.first().map(Vec::len).unwrap_or(0);
    if let Some(bad) = windows.iter().find(|w| w.len() != width) {
        return Err(WindowError::DimensionMismatch {
            expected: width,
            actual: bad.len(),
        });
    }
    Ok(width)
}

impl Regressor for LinearRegression {
    fn fit(&mut self, windows: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        if windows.len() != targets.len() {
            return Err(WindowError::DimensionMismatch {
                expected: windows.len(),
                actual: targets.len(),
            });
        }
        if windows.is_empty() {
            return Err(WindowError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }

        let n = windows.len();
        let p = feature_width(windows)?;

        let mut x = DMatrix::from_fn(n, p, |i, j| windows[i][j]);
        let mut y = DVector::from_column_slice(targets);

        // Centre so the intercept drops out of the solve
        let (x_offset, y_offset) = if self.fit_intercept {
            let x_offset: Vec<f64> = (0..p).map(|j| x.column(j).mean()).collect();
            let y_offset = y.mean();
            for j in 0..p {
                x.column_mut(j).add_scalar_mut(-x_offset[j]);
            }
            y.add_scalar_mut(-y_offset);
            (x_offset, y_offset)
        } else {
            (vec![0.0; p], 0.0)
        };

        let scale: Vec<f64> = if self.fit_intercept && self.normalize {
            (0..p)
                .map(|j| {
                    let s = norm(x.column(j).iter().copied(), Norm::L2);
                    if s > 0.0 {
                        s
                    } else {
                        1.0
                    }
                })
                .collect()
        } else {
            vec![1.0; p]
        };
        for j in 0..p {
            x.column_mut(j).unscale_mut(scale[j]);
        }

        // All-zero design (constant columns or a single row): nothing to learn
        let beta = if x.iter().all(|v| *v == 0.0) {
            DVector::zeros(p)
        } else {
            let svd = x.svd(true, true);
            let max_singular = svd.singular_values.iter().copied().fold(0.0, f64::max);
            svd.solve(&y, max_singular * RCOND)
                .map_err(|e| WindowError::NumericalError(e.to_string()))?
        };

        self.coefficients = (0..p).map(|j| beta[j] / scale[j]).collect();
        self.intercept = if self.fit_intercept {
            y_offset
                - x_offset
                    .iter()
                    .zip(self.coefficients.iter())
                    .map(|(m, w)| m * w)
                    .sum::<f64>()
        } else {
            0.0
        };

        if self.coefficients.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err(WindowError::NumericalError(
                "least squares produced non-finite coefficients".to_string(),
            ));
        }

        // Calculate R-squared
        let mean_y = targets.iter().sum::<f64>() / n as f64;
        let ss_tot: f64 = targets.iter().map(|t| (t - mean_y).powi(2)).sum();
        let ss_res: f64 = windows
            .iter()
            .zip(targets.iter())
            .map(|(w, t)| (t - self.predict_one(w)).powi(2))
            .sum();

        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict(&self, windows: &[Vec<f64>]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(WindowError::NotFitted);
        }

        if let Some(bad) = windows.iter().find(|w| w.len() != self.coefficients.len()) {
            return Err(WindowError::DimensionMismatch {
                expected: self.coefficients.len(),
                actual: bad.len(),
            });
        }

        Ok(windows.iter().map(|w| self.predict_one(w)).collect())
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
