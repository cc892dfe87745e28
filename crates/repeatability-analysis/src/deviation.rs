//! Per-trial deviation from the commanded target
//!
//! The deviation of a trial is `final_angle - target_angle`, the primary
//! accuracy metric of the experiment. [`EnrichedDataset`] pairs every trial
//! with its deviation; grouping, statistics and series extraction only accept
//! the enriched form, so they can never observe a trial without one.
//!
//! # Examples
//!
//! ```
//! use repeatability_analysis::{
//!     deviation::EnrichedDataset,
//!     trial::{Dataset, TrialRecord},
//! };
//!
//! let dataset = Dataset::new(vec![TrialRecord::new(0.0, 10.0, 10.25, 0.01)]);
//! let enriched = EnrichedDataset::from_dataset(&dataset);
//!
//! assert_eq!(enriched.trials()[0].deviation, 0.25);
//! ```

use serde::Serialize;

use crate::trial::{Dataset, TrialRecord};

/// A trial together with its derived deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnrichedTrial {
    #[serde(flatten)]
    pub record: TrialRecord,
    /// `final_angle - target_angle` (degrees)
    pub deviation: f64,
}

impl EnrichedTrial {
    #[must_use]
    pub fn new(record: TrialRecord) -> Self {
        Self {
            record,
            deviation: record.deviation(),
        }
    }
}

/// Trials in source order, each with its deviation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EnrichedDataset {
    trials: Vec<EnrichedTrial>,
}

impl EnrichedDataset {
    /// Computes the deviation of every trial in `dataset`.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let trials = dataset
            .trials()
            .iter()
            .copied()
            .map(EnrichedTrial::new)
            .collect();
        Self { trials }
    }

    /// Recomputes every deviation from the recorded angles.
    ///
    /// The result depends only on the angles, so repeated calls leave the
    /// values unchanged.
    pub fn recompute(&mut self) {
        for trial in &mut self.trials {
            trial.deviation = trial.record.deviation();
        }
    }

    #[must_use]
    pub fn trials(&self) -> &[EnrichedTrial] {
        &self.trials
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Extracts one field of every trial, in source order.
    #[must_use]
    pub fn column<F>(&self, field: F) -> Vec<f64>
    where
        F: FnMut(&EnrichedTrial) -> f64,
    {
        self.trials.iter().map(field).collect()
    }

    #[must_use]
    pub fn deviations(&self) -> Vec<f64> {
        self.column(|t| t.deviation)
    }

    #[must_use]
    pub fn dial_errors(&self) -> Vec<f64> {
        self.column(|t| t.record.dial_error)
    }

    #[must_use]
    pub fn start_angles(&self) -> Vec<f64> {
        self.column(|t| t.record.start_angle)
    }

    #[must_use]
    pub fn final_angles(&self) -> Vec<f64> {
        self.column(|t| t.record.final_angle)
    }
}

impl From<&Dataset> for EnrichedDataset {
    fn from(dataset: &Dataset) -> Self {
        Self::from_dataset(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            TrialRecord::new(0.0, 10.0, 10.2, 0.01),
            TrialRecord::new(0.0, 10.0, 9.8, 0.02),
            TrialRecord::new(90.0, 100.0, 100.1, 0.03),
            TrialRecord::new(90.0, 100.0, 99.9, 0.04),
        ])
    }

    #[test]
    fn test_deviation_is_final_minus_target() {
        let dataset = sample_dataset();
        let enriched = EnrichedDataset::from_dataset(&dataset);
        assert_eq!(enriched.len(), dataset.len());
        for (trial, record) in enriched.trials().iter().zip(dataset.trials()) {
            assert_eq!(trial.record, *record);
            assert_eq!(trial.deviation, record.final_angle - record.target_angle);
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut enriched = EnrichedDataset::from_dataset(&sample_dataset());
        let first = enriched.deviations();
        enriched.recompute();
        enriched.recompute();
        assert_eq!(enriched.deviations(), first);
    }

    #[test]
    fn test_columns_follow_source_order() {
        let enriched = EnrichedDataset::from(&sample_dataset());
        assert_eq!(enriched.start_angles(), vec![0.0, 0.0, 90.0, 90.0]);
        assert_eq!(enriched.dial_errors(), vec![0.01, 0.02, 0.03, 0.04]);
        assert_eq!(enriched.final_angles(), vec![10.2, 9.8, 100.1, 99.9]);
    }

    #[test]
    fn test_serializes_flat() {
        let dataset = Dataset::new(vec![TrialRecord::new(0.0, 1.0, 1.5, 0.1)]);
        let json = serde_json::to_value(EnrichedDataset::from_dataset(&dataset)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "start_angle": 0.0,
                "target_angle": 1.0,
                "final_angle": 1.5,
                "dial_error": 0.1,
                "deviation": 0.5,
            }])
        );
    }
}
