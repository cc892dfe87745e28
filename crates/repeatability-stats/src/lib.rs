//! Statistical building blocks for repeatability analysis.
//!
//! This crate provides the numeric core used to summarize positioning trials:
//!
//! - **Descriptive statistics**: mean, sample standard deviation, median, quartiles,
//!   IQR and Tukey-fence outliers
//! - **Percentiles**: linear-interpolation percentiles at arbitrary points
//! - **Histogram generation**: equal-width, half-open bins with the range of a linked field
//! - **Trend fitting**: ordinary least-squares lines
//!
//! All functions are pure: they take slices or iterators of `f64` and return
//! new values, failing with a typed error instead of producing NaN.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics and box-plot quantities
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Equal-width histogram with linked-field ranges
//! - [`regression`]: Least-squares trend lines
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use repeatability_stats::descriptive::DescriptiveStats;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.iqr, 2.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use repeatability_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]).unwrap();
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use repeatability_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
//! let histogram = Histogram::new(&values, None, 5).unwrap();
//! assert_eq!(histogram.total_count(), 10);
//! ```
//!
//! ## Fitting a trend line
//!
//! ```
//! use repeatability_stats::regression::TrendLine;
//!
//! let line = TrendLine::fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0]).unwrap();
//! assert_eq!(line.slope, 2.0);
//! assert_eq!(line.intercept, 1.0);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod percentiles;
pub mod regression;
