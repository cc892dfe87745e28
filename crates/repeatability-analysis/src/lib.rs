//! Repeatability analysis of rotary positioning experiments
//!
//! This crate turns a table of positioning trials into the data behind the
//! experiment's charts: deviation statistics per start angle, box-plot
//! quantities of the dial indicator error, a dial error histogram, a trend
//! line of dial error against start angle, and the trial-by-trial deviation
//! series.
//!
//! # Overview
//!
//! 1. **Load Trials** ([`table::SplitTable`]): Parse the experiment table and
//!    map its four named columns into a [`trial::Dataset`]
//! 2. **Compute Deviations** ([`deviation::EnrichedDataset`]): Attach
//!    `final_angle - target_angle` to every trial
//! 3. **Group by Start Angle** ([`grouping::group_by_start_angle`]): Partition
//!    trials into exact-key groups in ascending order
//! 4. **Summarize** ([`summary::GroupSummary`], [`summary::DatasetSummary`]):
//!    Descriptive statistics of deviation and dial error
//! 5. **Chart Data** ([`report::dial_error_histogram`], [`report::TrendOverlay`],
//!    [`series::TrialSeries`]): Histogram, trend line and labelled series
//!
//! [`report::AnalysisReport::build`] runs all steps in order.
//!
//! # Examples
//!
//! ```
//! use repeatability_analysis::{
//!     report::{AnalysisConfig, AnalysisReport},
//!     table::{ColumnNames, SplitTable},
//! };
//!
//! let table: SplitTable = serde_json::from_str(
//!     r#"{
//!         "columns": ["起始角度", "目标角度", "最终角度", "百分表测量误差"],
//!         "data": [
//!             [0, 10, 10.2, 0.01],
//!             [0, 10, 9.8, 0.03],
//!             [90, 100, 100.1, 0.02],
//!             [90, 100, 99.9, 0.04]
//!         ]
//!     }"#,
//! )
//! .unwrap();
//! let dataset = table.to_dataset(&ColumnNames::default()).unwrap();
//! let report = AnalysisReport::build(&dataset, &AnalysisConfig::default()).unwrap();
//!
//! for group in &report.groups {
//!     println!(
//!         "{}°: {:.3} ± {:.3}",
//!         group.start_angle, group.deviation.mean, group.deviation.std_dev
//!     );
//! }
//! ```

pub mod deviation;
pub mod grouping;
pub mod report;
pub mod series;
pub mod summary;
pub mod table;
pub mod trial;
