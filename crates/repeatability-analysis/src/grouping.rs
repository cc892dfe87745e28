//! Partitioning trials by start angle
//!
//! Trials that share a start angle form a [`Group`]. Two start angles belong
//! to the same group only when their `f64` values are bit-identical; there is
//! no tolerance-based bucketing. Groups are returned in ascending key order
//! and members keep their source order.
//!
//! # Examples
//!
//! ```
//! use repeatability_analysis::{
//!     deviation::EnrichedDataset,
//!     grouping::group_by_start_angle,
//!     trial::{Dataset, TrialRecord},
//! };
//!
//! let dataset = Dataset::new(vec![
//!     TrialRecord::new(90.0, 100.0, 100.1, 0.02),
//!     TrialRecord::new(0.0, 10.0, 10.2, 0.01),
//!     TrialRecord::new(90.0, 100.0, 99.9, 0.03),
//! ]);
//! let enriched = EnrichedDataset::from_dataset(&dataset);
//! let groups = group_by_start_angle(&enriched);
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].key, 0.0);
//! assert_eq!(groups[1].indices, vec![0, 2]);
//! ```

use std::{cmp::Ordering, collections::BTreeMap};

use serde::Serialize;

use crate::deviation::{EnrichedDataset, EnrichedTrial};

/// Start angle used as an exact grouping key.
///
/// Equality is bit equality and ordering is [`f64::total_cmp`], which agree
/// with each other.
#[derive(Debug, Clone, Copy)]
struct AngleKey(f64);

impl PartialEq for AngleKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for AngleKey {}

impl PartialOrd for AngleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AngleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Trials sharing one start angle.
#[derive(Debug, Clone, Serialize)]
pub struct Group<'a> {
    /// The shared start angle (degrees)
    pub key: f64,
    /// Positions of the members in the source dataset, ascending
    pub indices: Vec<usize>,
    /// Member trials in source order
    #[serde(skip)]
    pub members: Vec<&'a EnrichedTrial>,
}

impl Group<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn deviations(&self) -> Vec<f64> {
        self.members.iter().map(|t| t.deviation).collect()
    }

    #[must_use]
    pub fn dial_errors(&self) -> Vec<f64> {
        self.members.iter().map(|t| t.record.dial_error).collect()
    }
}

/// Groups trials by start angle.
///
/// Every trial appears in exactly one group. The result is sorted by key in
/// ascending order, and an empty dataset yields no groups.
#[must_use]
pub fn group_by_start_angle(dataset: &EnrichedDataset) -> Vec<Group<'_>> {
    let mut map: BTreeMap<AngleKey, Vec<(usize, &EnrichedTrial)>> = BTreeMap::new();
    for (index, trial) in dataset.trials().iter().enumerate() {
        map.entry(AngleKey(trial.record.start_angle))
            .or_default()
            .push((index, trial));
    }

    let groups = map
        .into_iter()
        .map(|(AngleKey(key), members)| {
            let (indices, members): (Vec<_>, Vec<_>) = members.into_iter().unzip();
            Group {
                key,
                indices,
                members,
            }
        })
        .collect::<Vec<_>>();
    tracing::debug!(
        groups = groups.len(),
        trials = dataset.len(),
        "grouped trials by start angle"
    );
    groups
}
