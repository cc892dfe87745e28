//! Descriptive statistics over the whole dataset and per start angle
//!
//! Two samples are summarized wherever statistics are reported:
//!
//! - **deviation** (`final_angle - target_angle`, degrees): mean ± standard
//!   deviation per start angle is the error-bar view of positioning accuracy
//! - **dial error** (millimeters): quartiles, whiskers and outliers per start
//!   angle feed the box-plot view of repeatability
//!
//! All standard deviations are sample standard deviations, see
//! [`DescriptiveStats`].

use repeatability_stats::descriptive::DescriptiveStats;
use serde::Serialize;

use crate::{deviation::EnrichedDataset, grouping::Group, report::AnalysisError};

/// Statistics for one start-angle group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    /// The shared start angle (degrees)
    pub start_angle: f64,
    /// Positions of the group's trials in the source dataset
    pub indices: Vec<usize>,
    pub deviation: DescriptiveStats,
    pub dial_error: DescriptiveStats,
}

impl GroupSummary {
    pub fn from_group(group: &Group<'_>) -> Result<Self, AnalysisError> {
        let subject = || format!("start angle {}°", group.key);
        Ok(Self {
            start_angle: group.key,
            indices: group.indices.clone(),
            deviation: AnalysisError::statistics(
                format!("deviation at {}", subject()),
                DescriptiveStats::new(group.deviations()),
            )?,
            dial_error: AnalysisError::statistics(
                format!("dial error at {}", subject()),
                DescriptiveStats::new(group.dial_errors()),
            )?,
        })
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.indices.len()
    }
}

/// Summarizes every group, keeping the group order.
pub fn summarize_groups(groups: &[Group<'_>]) -> Result<Vec<GroupSummary>, AnalysisError> {
    groups.iter().map(GroupSummary::from_group).collect()
}

/// Statistics over all trials.
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub trial_count: usize,
    pub deviation: DescriptiveStats,
    pub dial_error: DescriptiveStats,
}

impl DatasetSummary {
    /// # Errors
    ///
    /// Fails with a statistics error when the dataset has no trials.
    pub fn from_dataset(dataset: &EnrichedDataset) -> Result<Self, AnalysisError> {
        Ok(Self {
            trial_count: dataset.len(),
            deviation: AnalysisError::statistics(
                "deviation of all trials",
                DescriptiveStats::new(dataset.deviations()),
            )?,
            dial_error: AnalysisError::statistics(
                "dial error of all trials",
                DescriptiveStats::new(dataset.dial_errors()),
            )?,
        })
    }
}
