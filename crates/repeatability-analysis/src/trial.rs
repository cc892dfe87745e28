//! Trial records captured during a repeatability experiment
//!
//! Each trial commands the rotary stage from a start angle to a target angle,
//! then records the angle actually reached and the positioning error read
//! from a dial indicator.
//!
//! # Data Structure
//!
//! ```text
//! Dataset
//! └─ trials: Vec<TrialRecord>   (source row order)
//!     ├─ start_angle   (degrees)
//!     ├─ target_angle  (degrees)
//!     ├─ final_angle   (degrees, measured)
//!     └─ dial_error    (millimeters, separate sensor)
//! ```
//!
//! A `Dataset` carries no derived values. Deviations are attached by
//! [`EnrichedDataset::from_dataset`](crate::deviation::EnrichedDataset::from_dataset),
//! and every downstream component reads the enriched form.
//!
//! # Examples
//!
//! ```
//! use repeatability_analysis::trial::{Dataset, TrialRecord};
//!
//! let dataset = Dataset::new(vec![
//!     TrialRecord::new(0.0, 10.0, 10.2, 0.01),
//!     TrialRecord::new(90.0, 100.0, 99.9, 0.02),
//! ]);
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.trials()[1].start_angle, 90.0);
//! ```

use serde::{Deserialize, Serialize};

/// One row of the experiment table.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct TrialRecord {
    /// Commanded starting position (degrees)
    pub start_angle: f64,
    /// Commanded destination position (degrees)
    pub target_angle: f64,
    /// Measured achieved position (degrees)
    pub final_angle: f64,
    /// Positioning error measured by the dial indicator (millimeters)
    pub dial_error: f64,
}

impl TrialRecord {
    #[must_use]
    pub const fn new(start_angle: f64, target_angle: f64, final_angle: f64, dial_error: f64) -> Self {
        Self {
            start_angle,
            target_angle,
            final_angle,
            dial_error,
        }
    }

    /// Angular deviation of the trial: `final_angle - target_angle`.
    #[must_use]
    pub fn deviation(&self) -> f64 {
        self.final_angle - self.target_angle
    }
}

/// Ordered collection of trials as loaded from the source table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    trials: Vec<TrialRecord>,
}

impl Dataset {
    #[must_use]
    pub fn new(trials: Vec<TrialRecord>) -> Self {
        Self { trials }
    }

    #[must_use]
    pub fn trials(&self) -> &[TrialRecord] {
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
}

impl FromIterator<TrialRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = TrialRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
