use serde::Serialize;

/// Errors that can occur while fitting a [`TrendLine`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum TrendFitError {
    #[display("insufficient data for a trend line: need at least 2 points, got {len}")]
    InsufficientData { len: usize },
    #[display("insufficient data for a trend line: every x equals {value}")]
    ConstantX { value: f64 },
    #[display("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[display("non-finite point ({x}, {y}) at index {index}")]
    NonFinite { index: usize, x: f64, y: f64 },
}

impl TrendFitError {
    /// Returns `true` for the conditions where the data cannot determine a slope.
    #[must_use]
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. } | Self::ConstantX { .. })
    }
}

/// Ordinary least-squares line `y = slope * x + intercept`.
///
/// # Examples
///
/// ```
/// use repeatability_stats::regression::TrendLine;
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [0.0, 2.0, 4.0, 6.0];
/// let line = TrendLine::fit(&x, &y).unwrap();
///
/// assert_eq!(line.slope, 2.0);
/// assert_eq!(line.intercept, 0.0);
/// assert_eq!(line.predict(10.0), 20.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination, `None` when every y is the same.
    pub r_squared: Option<f64>,
    /// Number of points the line was fitted to.
    pub n: usize,
}

impl TrendLine {
    /// Fits a line to the points `(x[i], y[i])` with the closed-form OLS solution.
    ///
    /// `slope = Σ(x - x̄)(y - ȳ) / Σ(x - x̄)²` and `intercept = ȳ - slope · x̄`.
    ///
    /// # Errors
    ///
    /// * [`TrendFitError::LengthMismatch`] if `x` and `y` differ in length
    /// * [`TrendFitError::InsufficientData`] if there are fewer than two points
    /// * [`TrendFitError::NonFinite`] if any coordinate is NaN or infinite
    /// * [`TrendFitError::ConstantX`] if all `x` values are identical
    #[expect(clippy::cast_precision_loss)]
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self, TrendFitError> {
        if x.len() != y.len() {
            return Err(TrendFitError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        let n = x.len();
        if n < 2 {
            return Err(TrendFitError::InsufficientData { len: n });
        }
        if let Some((index, (&x, &y))) = x
            .iter()
            .zip(y)
            .enumerate()
            .find(|(_, (x, y))| !x.is_finite() || !y.is_finite())
        {
            return Err(TrendFitError::NonFinite { index, x, y });
        }
        // Checked exactly: a rounded mean leaves a tiny positive Sxx for values like 0.1.
        if x.iter().all(|&v| v == x[0]) {
            return Err(TrendFitError::ConstantX { value: x[0] });
        }

        let x_mean = x.iter().sum::<f64>() / n as f64;
        let y_mean = y.iter().sum::<f64>() / n as f64;
        let (sxx, sxy, syy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), (x, y)| {
            let dx = x - x_mean;
            let dy = y - y_mean;
            (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
        });
        if sxx <= 0.0 {
            return Err(TrendFitError::ConstantX { value: x[0] });
        }

        let slope = sxy / sxx;
        let intercept = y_mean - slope * x_mean;
        let r_squared = (syy > 0.0).then(|| (sxy * sxy) / (sxx * syy));

        Ok(Self {
            slope,
            intercept,
            r_squared,
            n,
        })
    }

    /// Evaluates the line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// End points of the line over `[x_min, x_max]`, for overlaying on a scatter plot.
    #[must_use]
    pub fn segment(&self, x_min: f64, x_max: f64) -> [(f64, f64); 2] {
        [(x_min, self.predict(x_min)), (x_max, self.predict(x_max))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let line = TrendLine::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 2.0, 4.0, 6.0]).unwrap();
        assert_eq!(line.slope, 2.0);
        assert_eq!(line.intercept, 0.0);
        assert_eq!(line.r_squared, Some(1.0));
        assert_eq!(line.n, 4);
    }

    #[test]
    fn test_noisy_fit() {
        let x = [0.0, 90.0, 180.0, 270.0];
        let y = [0.01, 0.03, 0.02, 0.04];
        let line = TrendLine::fit(&x, &y).unwrap();
        // x̄ = 135, ȳ = 0.025, Sxy = 3.6, Sxx = 40500
        assert!((line.slope - 3.6 / 40500.0).abs() < 1e-12);
        assert!((line.intercept - (0.025 - 135.0 * 3.6 / 40500.0)).abs() < 1e-12);
        let r2 = line.r_squared.unwrap();
        assert!((0.0..=1.0).contains(&r2));
    }

    #[test]
    fn test_flat_y_has_no_r_squared() {
        let line = TrendLine::fit(&[1.0, 2.0, 3.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(line.slope, 0.0);
        assert_eq!(line.intercept, 5.0);
        assert_eq!(line.r_squared, None);
    }

    #[test]
    fn test_insufficient_data() {
        let err = TrendFitError::InsufficientData { len: 1 };
        assert_eq!(TrendLine::fit(&[1.0], &[2.0]).unwrap_err(), err);
        assert!(err.is_insufficient_data());

        let err = TrendLine::fit(&[4.0, 4.0, 4.0], &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, TrendFitError::ConstantX { value: 4.0 });
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn test_constant_non_dyadic_x() {
        assert_eq!(
            TrendLine::fit(&[0.1; 3], &[1.0, 2.0, 4.0]).unwrap_err(),
            TrendFitError::ConstantX { value: 0.1 }
        );
        assert_eq!(
            TrendLine::fit(&[33.3; 7], &[0.01, 0.02, 0.03, 0.04, 0.05, 0.06, 0.08]).unwrap_err(),
            TrendFitError::ConstantX { value: 33.3 }
        );
    }

    #[test]
    fn test_invalid_points() {
        assert_eq!(
            TrendLine::fit(&[1.0, 2.0], &[1.0]).unwrap_err(),
            TrendFitError::LengthMismatch { x_len: 2, y_len: 1 }
        );
        assert!(matches!(
            TrendLine::fit(&[1.0, f64::INFINITY], &[1.0, 2.0]).unwrap_err(),
            TrendFitError::NonFinite { index: 1, .. }
        ));
    }

    #[test]
    fn test_segment() {
        let line = TrendLine {
            slope: 0.5,
            intercept: 1.0,
            r_squared: None,
            n: 2,
        };
        assert_eq!(line.segment(0.0, 4.0), [(0.0, 1.0), (4.0, 3.0)]);
    }
}
