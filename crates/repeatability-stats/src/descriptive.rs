use serde::Serialize;

use crate::percentiles;

/// Multiplier applied to the interquartile range to place the Tukey fences.
pub const TUKEY_FENCE_FACTOR: f64 = 1.5;

/// Errors that can occur while summarizing a sample.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum StatisticsError {
    #[display("cannot compute statistics over an empty sample")]
    EmptySample,
    #[display("non-finite value {value} at index {index}")]
    NonFinite { index: usize, value: f64 },
}

impl StatisticsError {
    /// Fails with [`StatisticsError::NonFinite`] on the first NaN or infinite value.
    pub(crate) fn check_finite(values: &[f64]) -> Result<(), Self> {
        match values.iter().position(|v| !v.is_finite()) {
            Some(index) => Err(Self::NonFinite {
                index,
                value: values[index],
            }),
            None => Ok(()),
        }
    }
}

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency, dispersion,
/// and spread for a dataset of `f64` values, together with the box-plot
/// quantities (quartiles, Tukey fences, whiskers and outliers).
///
/// The standard deviation is always the sample standard deviation
/// (`n - 1` in the denominator). A single-element sample has a standard
/// deviation of `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveStats {
    /// The number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f64,
    /// The maximum value in the dataset.
    pub max: f64,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f64,
    /// The median value of the dataset.
    pub median: f64,
    /// The sample variance of the dataset.
    pub variance: f64,
    /// The sample standard deviation of the dataset.
    pub std_dev: f64,
    /// `std_dev / mean`, or `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// The first quartile (25th percentile).
    pub q1: f64,
    /// The third quartile (75th percentile).
    pub q3: f64,
    /// The interquartile range (`q3 - q1`).
    pub iqr: f64,
    /// `q1 - 1.5 * iqr`.
    pub lower_fence: f64,
    /// `q3 + 1.5 * iqr`.
    pub upper_fence: f64,
    /// The smallest value inside the fences.
    pub whisker_low: f64,
    /// The largest value inside the fences.
    pub whisker_high: f64,
    /// Distinct values outside the fences, in ascending order.
    pub outliers: Vec<f64>,
    /// Number of values outside the fences, counting repeated values.
    pub outlier_count: usize,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// This method will sort the values internally before computing statistics.
    ///
    /// # Errors
    ///
    /// * [`StatisticsError::EmptySample`] if the dataset is empty
    /// * [`StatisticsError::NonFinite`] if any value is NaN or infinite, with
    ///   its position in `values`
    ///
    /// # Examples
    ///
    /// ```
    /// # use repeatability_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// assert_eq!(stats.q1, 2.0);
    /// assert_eq!(stats.q3, 4.0);
    /// assert!(stats.outliers.is_empty());
    /// ```
    pub fn new<I>(values: I) -> Result<Self, StatisticsError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        StatisticsError::check_finite(&values)?;
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// This is an optimized version that skips the sorting step.
    /// Use this when you already have sorted data to avoid unnecessary work.
    ///
    /// # Errors
    ///
    /// * [`StatisticsError::EmptySample`] if `sorted_values` is empty
    /// * [`StatisticsError::NonFinite`] if any value is NaN or infinite
    ///
    /// # Panics
    ///
    /// Panics if the finite `sorted_values` are not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted_values: &[f64]) -> Result<Self, StatisticsError> {
        StatisticsError::check_finite(sorted_values)?;
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let (&min, &max) = sorted_values
            .first()
            .zip(sorted_values.last())
            .ok_or(StatisticsError::EmptySample)?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let variance = if count > 1 {
            sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>()
                / (n - 1.0)
        } else {
            0.0
        };
        let std_dev = variance.sqrt();
        let coefficient_of_variation = (mean.abs() > 0.0).then(|| std_dev / mean);

        let quantile = |p| {
            percentiles::compute_percentile(sorted_values, p).ok_or(StatisticsError::EmptySample)
        };
        let q1 = quantile(25.0)?;
        let median = quantile(50.0)?;
        let q3 = quantile(75.0)?;
        let iqr = q3 - q1;
        let lower_fence = q1 - TUKEY_FENCE_FACTOR * iqr;
        let upper_fence = q3 + TUKEY_FENCE_FACTOR * iqr;

        let is_outlier = |v: f64| v < lower_fence || v > upper_fence;
        let mut outliers = sorted_values
            .iter()
            .copied()
            .filter(|&v| is_outlier(v))
            .collect::<Vec<_>>();
        let outlier_count = outliers.len();
        outliers.dedup_by(|a, b| a.to_bits() == b.to_bits());

        // The fences always enclose the quartiles, so at least one value lies inside.
        let mut inliers = sorted_values.iter().copied().filter(|&v| !is_outlier(v));
        let whisker_low = inliers.next().unwrap_or(min);
        let whisker_high = inliers.next_back().unwrap_or(whisker_low);

        Ok(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev,
            coefficient_of_variation,
            q1,
            q3,
            iqr,
            lower_fence,
            upper_fence,
            whisker_low,
            whisker_high,
            outliers,
            outlier_count,
        })
    }

    /// Returns `true` if `value` lies outside the Tukey fences of this sample.
    #[must_use]
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower_fence || value > self.upper_fence
    }
}
