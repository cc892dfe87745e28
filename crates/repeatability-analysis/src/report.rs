//! Full analysis of one experiment
//!
//! [`AnalysisReport::build`] runs every component over a loaded dataset:
//!
//! ```text
//! Dataset
//!     ↓
//! EnrichedDataset (deviation per trial)
//!     ├─ DatasetSummary        (all trials)
//!     ├─ Groups → GroupSummary (per start angle)
//!     ├─ Histogram             (dial error, linked to final angle)
//!     ├─ TrendOverlay          (dial error against start angle)
//!     └─ TrialSeries           (deviation per experiment number)
//! ```
//!
//! Each component reads the enriched dataset independently. The first
//! failure aborts the report with an [`AnalysisError`] naming the component
//! and the data condition; no partial report is produced.

use repeatability_stats::{
    descriptive::StatisticsError,
    histogram::{self, Histogram, HistogramError},
    regression::{TrendFitError, TrendLine},
};
use serde::{Deserialize, Serialize};

use crate::{
    deviation::EnrichedDataset,
    grouping,
    series::{self, TrialSeries},
    summary::{self, DatasetSummary, GroupSummary},
    table::ColumnNames,
    trial::Dataset,
};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("statistics of {subject}: {source}")]
    Statistics {
        subject: String,
        source: StatisticsError,
    },
    #[display("dial error histogram: {source}")]
    Histogram { source: HistogramError },
    #[display("trend of dial error against start angle: {source}")]
    Trend { source: TrendFitError },
}

impl AnalysisError {
    pub(crate) fn statistics<T>(
        subject: impl Into<String>,
        result: Result<T, StatisticsError>,
    ) -> Result<T, Self> {
        result.map_err(|source| Self::Statistics {
            subject: subject.into(),
            source,
        })
    }
}

/// Tunable parameters of an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of equal-width bins in the dial error histogram
    pub histogram_bins: usize,
    /// Spacing between labelled trials in the deviation series
    pub label_interval: usize,
    /// Column headers of the input table
    pub columns: ColumnNames,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: histogram::DEFAULT_NUM_BINS,
            label_interval: series::DEFAULT_LABEL_INTERVAL,
            columns: ColumnNames::default(),
        }
    }
}

/// Histogram of dial errors; each bin reports the range of final angles of its trials.
pub fn dial_error_histogram(
    dataset: &EnrichedDataset,
    num_bins: usize,
) -> Result<Histogram, AnalysisError> {
    let errors = dataset.dial_errors();
    let final_angles = dataset.final_angles();
    Histogram::new(&errors, Some(final_angles.as_slice()), num_bins)
        .map_err(|source| AnalysisError::Histogram { source })
}

/// Trend line of dial error against start angle, with the segment to draw over the scatter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendOverlay {
    pub line: TrendLine,
    /// Line end points at the smallest and largest start angle
    pub segment: [(f64, f64); 2],
}

impl TrendOverlay {
    pub fn fit(dataset: &EnrichedDataset) -> Result<Self, AnalysisError> {
        let x = dataset.start_angles();
        let y = dataset.dial_errors();
        let line = TrendLine::fit(&x, &y).map_err(|source| AnalysisError::Trend { source })?;
        // A successful fit guarantees at least two finite x values.
        let x_min = x.iter().copied().fold(f64::INFINITY, f64::min);
        let x_max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Ok(Self {
            line,
            segment: line.segment(x_min, x_max),
        })
    }
}

/// Everything a renderer needs to draw the five experiment charts.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub trials: EnrichedDataset,
    pub summary: DatasetSummary,
    pub groups: Vec<GroupSummary>,
    pub histogram: Histogram,
    pub trend: TrendOverlay,
    pub series: TrialSeries,
}

impl AnalysisReport {
    /// Runs the full analysis over `dataset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatability_analysis::{
    ///     report::{AnalysisConfig, AnalysisReport},
    ///     trial::{Dataset, TrialRecord},
    /// };
    ///
    /// let dataset = Dataset::new(vec![
    ///     TrialRecord::new(0.0, 10.0, 10.2, 0.01),
    ///     TrialRecord::new(0.0, 10.0, 9.8, 0.03),
    ///     TrialRecord::new(90.0, 100.0, 100.1, 0.02),
    ///     TrialRecord::new(90.0, 100.0, 99.9, 0.04),
    /// ]);
    /// let report = AnalysisReport::build(&dataset, &AnalysisConfig::default()).unwrap();
    ///
    /// assert_eq!(report.groups.len(), 2);
    /// assert_eq!(report.histogram.bins.len(), 10);
    /// assert_eq!(report.series.points.len(), 4);
    /// ```
    pub fn build(dataset: &Dataset, config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        tracing::info!(trials = dataset.len(), "computing deviations");
        let trials = EnrichedDataset::from_dataset(dataset);

        let summary = DatasetSummary::from_dataset(&trials)?;

        let groups = grouping::group_by_start_angle(&trials);
        tracing::info!(groups = groups.len(), "summarizing start angle groups");
        let groups = summary::summarize_groups(&groups)?;

        tracing::info!(bins = config.histogram_bins, "binning dial errors");
        let histogram = dial_error_histogram(&trials, config.histogram_bins)?;

        tracing::info!("fitting dial error trend");
        let trend = TrendOverlay::fit(&trials)?;

        let series = TrialSeries::from_dataset(&trials, config.label_interval);

        Ok(Self {
            trials,
            summary,
            groups,
            histogram,
            trend,
            series,
        })
    }
}
