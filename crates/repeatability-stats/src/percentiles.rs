use serde::Serialize;

use crate::descriptive::StatisticsError;

/// Precomputed percentile values for a dataset.
///
/// This structure stores percentile-value pairs for efficient lookup
/// of commonly used percentile points.
///
/// # Examples
///
/// ```
/// use repeatability_stats::percentiles::Percentiles;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]).unwrap();
///
/// assert_eq!(percentiles.get(25.0), Some(2.0));
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(75.0), Some(4.0));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Percentiles {
    /// Percentile-value pairs, in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Arguments
    ///
    /// * `sorted_values` - Values sorted in ascending order
    /// * `percentile_points` - The percentile points to compute (e.g., [25.0, 50.0, 75.0])
    ///
    /// # Errors
    ///
    /// * [`StatisticsError::EmptySample`] if `sorted_values` is empty
    /// * [`StatisticsError::NonFinite`] if any value is NaN or infinite
    ///
    /// # Panics
    ///
    /// Panics if the finite `sorted_values` are not sorted in ascending order.
    pub fn from_sorted(
        sorted_values: &[f64],
        percentile_points: &[f64],
    ) -> Result<Self, StatisticsError> {
        StatisticsError::check_finite(sorted_values)?;
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );
        if sorted_values.is_empty() {
            return Err(StatisticsError::EmptySample);
        }

        let values = percentile_points
            .iter()
            .filter_map(|&p| compute_percentile(sorted_values, p).map(|value| (p, value)))
            .collect();
        Ok(Self { values })
    }

    /// Computes percentiles from unsorted values.
    ///
    /// This method will sort the values internally before computing percentiles.
    ///
    /// # Errors
    ///
    /// Same as [`Percentiles::from_sorted`]; a non-finite value is reported
    /// with its position in `values`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatability_stats::percentiles::Percentiles;
    ///
    /// let values = [5.0, 2.0, 8.0, 1.0, 9.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 90.0]).unwrap();
    ///
    /// assert_eq!(percentiles.get(50.0), Some(5.0));
    /// assert!(Percentiles::new(&[], &[50.0]).is_err());
    /// ```
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Result<Self, StatisticsError> {
        StatisticsError::check_finite(values)?;
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        Self::from_sorted(&sorted, percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatability_stats::percentiles::Percentiles;
    ///
    /// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// let percentiles = Percentiles::new(&values, &[50.0, 95.0]).unwrap();
    ///
    /// assert_eq!(percentiles.get(50.0), Some(3.0));
    /// assert_eq!(percentiles.get(25.0), None); // Not precomputed
    /// ```
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }

    /// Returns all percentile-value pairs as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[(f64, f64)] {
        &self.values
    }
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between order statistics: for `n` sorted values
/// the `p`-th percentile sits at fractional index `p / 100 * (n - 1)`, and the
/// result interpolates between the two nearest ranks. Percentiles outside
/// `0.0..=100.0` are clamped to the extremes.
///
/// # Returns
///
/// The value at the specified percentile, or `None` if the input is empty.
///
/// # Examples
///
/// ```
/// use repeatability_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
///
/// assert_eq!(compute_percentile(&values, 50.0), Some(2.5));
/// assert_eq!(compute_percentile(&values, 25.0), Some(1.75));
/// assert_eq!(compute_percentile(&[], 50.0), None);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> Option<f64> {
    let last = sorted_values.len().checked_sub(1)?;
    let rank = (percentile.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lower = (rank.floor() as usize).min(last);
    let upper = (rank.ceil() as usize).min(last);
    let fraction = rank - lower as f64;
    let lo = sorted_values[lower];
    let hi = sorted_values[upper];
    Some(lo + (hi - lo) * fraction)
}
