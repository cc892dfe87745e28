//! Trial-by-trial deviation series
//!
//! The line-chart view plots the deviation of every trial against its
//! experiment number. Trials are usually run in blocks that share a start
//! angle, so only every `label_interval`-th trial gets an axis label showing
//! its number and start angle; the rest are left blank.

use serde::Serialize;

use crate::deviation::EnrichedDataset;

/// Default spacing between labelled trials.
pub const DEFAULT_LABEL_INTERVAL: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// 1-based experiment number
    pub number: usize,
    pub start_angle: f64,
    pub deviation: f64,
    /// Axis label, empty for unlabelled trials
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialSeries {
    pub points: Vec<SeriesPoint>,
}

impl TrialSeries {
    /// Builds the series in source order.
    ///
    /// Trials at positions 0, `label_interval`, `2 * label_interval`, ... are
    /// labelled `"{number}\n{start_angle}°"`. A `label_interval` of zero
    /// labels nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use repeatability_analysis::{
    ///     deviation::EnrichedDataset,
    ///     series::TrialSeries,
    ///     trial::{Dataset, TrialRecord},
    /// };
    ///
    /// let dataset = Dataset::new(vec![TrialRecord::new(45.0, 0.0, 0.5, 0.0); 3]);
    /// let series = TrialSeries::from_dataset(&EnrichedDataset::from_dataset(&dataset), 2);
    ///
    /// assert_eq!(series.points[0].label, "1\n45°");
    /// assert_eq!(series.points[1].label, "");
    /// assert_eq!(series.points[2].label, "3\n45°");
    /// ```
    #[must_use]
    pub fn from_dataset(dataset: &EnrichedDataset, label_interval: usize) -> Self {
        let points = dataset
            .trials()
            .iter()
            .enumerate()
            .map(|(i, trial)| {
                let number = i + 1;
                let start_angle = trial.record.start_angle;
                let label = if i.checked_rem(label_interval) == Some(0) {
                    format!("{number}\n{start_angle}°")
                } else {
                    String::new()
                };
                SeriesPoint {
                    number,
                    start_angle,
                    deviation: trial.deviation,
                    label,
                }
            })
            .collect();
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::{Dataset, TrialRecord};

    fn dataset(len: usize) -> EnrichedDataset {
        let trials = (0..len)
            .map(|i| {
                let start = if i < 10 { 0.0 } else { 90.0 };
                TrialRecord::new(start, start + 10.0, start + 10.5, 0.0)
            })
            .collect::<Dataset>();
        EnrichedDataset::from_dataset(&trials)
    }

    #[test]
    fn test_default_interval_labels_each_block() {
        let series = TrialSeries::from_dataset(&dataset(25), DEFAULT_LABEL_INTERVAL);
        let labelled = series
            .points
            .iter()
            .filter(|p| !p.label.is_empty())
            .map(|p| p.label.as_str())
            .collect::<Vec<_>>();
        assert_eq!(labelled, vec!["1\n0°", "11\n90°", "21\n90°"]);
        assert_eq!(series.points[24].number, 25);
        assert_eq!(series.points[24].deviation, 0.5);
    }

    #[test]
    fn test_zero_interval_labels_nothing() {
        let series = TrialSeries::from_dataset(&dataset(3), 0);
        assert!(series.points.iter().all(|p| p.label.is_empty()));
    }
}
