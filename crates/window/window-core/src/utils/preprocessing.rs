//! Feature scaling utilities
//!
//! Vector norms and per-row normalization of feature matrices.

/// Vector norm used for scaling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Norm {
    /// Sum of absolute values
    L1,
    /// Euclidean length
    #[default]
    L2,
    /// Largest absolute value
    Max,
}

/// Compute the norm of a sequence of values.
pub fn norm<I>(values: I, kind: Norm) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let values = values.into_iter();
    match kind {
        Norm::L1 => values.map(f64::abs).sum(),
        Norm::L2 => values.map(|v| v * v).sum::<f64>().sqrt(),
        Norm::Max => values.map(f64::abs).fold(0.0, f64::max),
    }
}

/// Scale every row to unit norm.
///
/// Rows whose norm is zero are returned unchanged.
///
/// # Example
///
/// ```rust
/// use window_core::utils::preprocessing::{normalize_rows, Norm};
///
/// let rows = vec![vec![3.0, 4.0]];
/// let scaled = normalize_rows(&rows, Norm::L2);
/// assert!((scaled[0][0] - 0.6).abs() < 1e-12);
/// assert!((scaled[0][1] - 0.8).abs() < 1e-12);
/// ```
pub fn normalize_rows(rows: &[Vec<f64>], kind: Norm) -> Vec<Vec<f64>> {
    rows.iter()
        .map(|row| {
            let n = norm(row.iter().copied(), kind);
            if n < 1e-300 {
                row.clone()
            } else {
                row.iter().map(|v| v / n).collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norms() {
        let v = [3.0, -4.0];
        assert!((norm(v, Norm::L1) - 7.0).abs() < 1e-12);
        assert!((norm(v, Norm::L2) - 5.0).abs() < 1e-12);
        assert!((norm(v, Norm::Max) - 4.0).abs() < 1e-12);
        assert_eq!(norm(std::iter::empty(), Norm::L2), 0.0);
    }

    #[test]
    fn test_normalize_rows_l2() {
        let rows = vec![
            vec![3.0, -2.0, 8.0],
            vec![2.1, 9.2, 4.4],
            vec![0.2, 3.5, 1.1],
            vec![2.5, -3.3, 0.56],
            vec![33.2, -25.6, 13.4],
            vec![23.0, 32.0, -1.8],
        ];
        let scaled = normalize_rows(&rows, Norm::L2);

        for (row, original) in scaled.iter().zip(rows.iter()) {
            assert!((norm(row.iter().copied(), Norm::L2) - 1.0).abs() < 1e-12);
            // Direction and sign survive scaling
            let ratio = original[0] / row[0];
            for (o, s) in original.iter().zip(row.iter()) {
                assert!((o / s - ratio).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_normalize_rows_l1_and_max() {
        let rows = vec![vec![1.0, -3.0]];
        assert_eq!(normalize_rows(&rows, Norm::L1), vec![vec![0.25, -0.75]]);
        assert_eq!(normalize_rows(&rows, Norm::Max), vec![vec![1.0 / 3.0, -1.0]]);
    }

    #[test]
    fn test_zero_row_untouched() {
        let rows = vec![vec![0.0, 0.0]];
        assert_eq!(normalize_rows(&rows, Norm::L2), rows);
    }
}
