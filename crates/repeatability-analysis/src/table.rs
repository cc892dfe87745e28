//! Tabular input for trial datasets
//!
//! Experiment sheets are exchanged as JSON tables in the "split" layout
//! (`{"columns": [...], "data": [[...], ...]}`), which is what
//! `pandas.DataFrame.to_json(orient="split")` writes. An `index` key, if
//! present, is ignored.
//!
//! Loading validates the table before any analysis runs:
//!
//! - every required column must be present, otherwise the load fails naming it
//! - every required cell must be numeric; numeric strings such as `"90"` are
//!   accepted, anything else is reported with its row and column
//!
//! Nothing is dropped or replaced with NaN.
//!
//! # Examples
//!
//! ```
//! use repeatability_analysis::table::{ColumnNames, SplitTable};
//!
//! let json = r#"{
//!     "columns": ["起始角度", "目标角度", "最终角度", "百分表测量误差"],
//!     "data": [[0, 10, 10.2, 0.01], ["90", 100, 99.9, 0.02]]
//! }"#;
//! let table: SplitTable = serde_json::from_str(json).unwrap();
//! let dataset = table.to_dataset(&ColumnNames::default()).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.trials()[1].start_angle, 90.0);
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::trial::{Dataset, TrialRecord};

/// Header of the start angle column in the original experiment sheet.
pub const DEFAULT_START_ANGLE_COLUMN: &str = "起始角度";
/// Header of the target angle column in the original experiment sheet.
pub const DEFAULT_TARGET_ANGLE_COLUMN: &str = "目标角度";
/// Header of the final angle column in the original experiment sheet.
pub const DEFAULT_FINAL_ANGLE_COLUMN: &str = "最终角度";
/// Header of the dial-indicator error column in the original experiment sheet.
pub const DEFAULT_DIAL_ERROR_COLUMN: &str = "百分表测量误差";

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("missing required column '{column}'")]
    MissingColumn { column: String },
    #[display("row {row}, column '{column}': value {value} is not numeric")]
    NonNumericValue {
        row: usize,
        column: String,
        value: Value,
    },
    #[display("row {row}, column '{column}': value is missing")]
    MissingValue { row: usize, column: String },
    #[display("row {row} has {actual} cells but the table has {expected} columns")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Names of the columns holding each trial field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnNames {
    pub start_angle: String,
    pub target_angle: String,
    pub final_angle: String,
    pub dial_error: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            start_angle: DEFAULT_START_ANGLE_COLUMN.to_owned(),
            target_angle: DEFAULT_TARGET_ANGLE_COLUMN.to_owned(),
            final_angle: DEFAULT_FINAL_ANGLE_COLUMN.to_owned(),
            dial_error: DEFAULT_DIAL_ERROR_COLUMN.to_owned(),
        }
    }
}

impl ColumnNames {
    /// Required columns in [`TrialRecord`] field order.
    fn required(&self) -> [&str; 4] {
        [
            self.start_angle.as_str(),
            self.target_angle.as_str(),
            self.final_angle.as_str(),
            self.dial_error.as_str(),
        ]
    }
}

/// A table in the column/row "split" layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SplitTable {
    pub columns: Vec<String>,
    pub data: Vec<Vec<Value>>,
}

impl SplitTable {
    /// Converts the table into a [`Dataset`], one trial per row in source order.
    ///
    /// Row numbers in errors are 0-based positions in `data`.
    ///
    /// # Errors
    ///
    /// * [`LoadError::MissingColumn`] if a required column is absent (checked before any row)
    /// * [`LoadError::RaggedRow`] if a row's length differs from the column count
    /// * [`LoadError::MissingValue`] if a required cell is `null`
    /// * [`LoadError::NonNumericValue`] if a required cell is not a finite number
    pub fn to_dataset(&self, columns: &ColumnNames) -> Result<Dataset, LoadError> {
        let [start, target, fin, dial] = columns.required().map(|name| {
            self.columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: name.to_owned(),
                })
        });
        let positions = [start?, target?, fin?, dial?];

        let trials = self
            .data
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                if cells.len() != self.columns.len() {
                    return Err(LoadError::RaggedRow {
                        row,
                        expected: self.columns.len(),
                        actual: cells.len(),
                    });
                }
                let cell = |idx: usize| self.numeric_cell(row, idx, &cells[idx]);
                let [start, target, fin, dial] = positions;
                Ok(TrialRecord::new(
                    cell(start)?,
                    cell(target)?,
                    cell(fin)?,
                    cell(dial)?,
                ))
            })
            .collect::<Result<Dataset, _>>()?;

        tracing::debug!(
            rows = trials.len(),
            columns = self.columns.len(),
            "loaded trial table"
        );
        Ok(trials)
    }

    fn numeric_cell(&self, row: usize, idx: usize, value: &Value) -> Result<f64, LoadError> {
        let column = || self.columns[idx].clone();
        if value.is_null() {
            return Err(LoadError::MissingValue {
                row,
                column: column(),
            });
        }
        coerce_numeric(value).ok_or_else(|| LoadError::NonNumericValue {
            row,
            column: column(),
            value: value.clone(),
        })
    }
}

/// Interprets a JSON cell as a finite number.
///
/// Numbers are taken as is and strings are parsed after trimming
/// whitespace. Everything else, and any non-finite result, yields `None`.
#[must_use]
pub fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn english_columns() -> ColumnNames {
        ColumnNames {
            start_angle: "start".to_owned(),
            target_angle: "target".to_owned(),
            final_angle: "final".to_owned(),
            dial_error: "error".to_owned(),
        }
    }

    fn table(columns: &[&str], data: Value) -> SplitTable {
        SplitTable {
            columns: columns.iter().map(|&c| c.to_owned()).collect(),
            data: serde_json::from_value(data).unwrap(),
        }
    }

    #[test]
    fn test_loads_rows_in_order() {
        let table = table(
            &["note", "final", "target", "start", "error"],
            json!([
                ["a", 10.2, 10, 0, 0.01],
                ["b", 99.9, 100, 90, 0.03],
            ]),
        );
        let dataset = table.to_dataset(&english_columns()).unwrap();
        assert_eq!(
            dataset.trials(),
            &[
                TrialRecord::new(0.0, 10.0, 10.2, 0.01),
                TrialRecord::new(90.0, 100.0, 99.9, 0.03),
            ]
        );
    }

    #[test]
    fn test_missing_column_is_named() {
        let table = table(&["start", "target", "error"], json!([]));
        let err = table.to_dataset(&english_columns()).unwrap_err();
        assert_eq!(
            err,
            LoadError::MissingColumn {
                column: "final".to_owned()
            }
        );
        assert_eq!(err.to_string(), "missing required column 'final'");
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let table = table(
            &["start", "target", "final", "error"],
            json!([[" 180 ", "190", 190.5, "0.5"]]),
        );
        let dataset = table.to_dataset(&english_columns()).unwrap();
        assert_eq!(dataset.trials()[0], TrialRecord::new(180.0, 190.0, 190.5, 0.5));
    }

    #[test]
    fn test_non_numeric_value_reports_position() {
        let table = table(
            &["start", "target", "final", "error"],
            json!([[0, 10, 10.1, 0.0], ["north", 10, 10.1, 0.0]]),
        );
        let err = table.to_dataset(&english_columns()).unwrap_err();
        assert_eq!(
            err,
            LoadError::NonNumericValue {
                row: 1,
                column: "start".to_owned(),
                value: json!("north"),
            }
        );
    }

    #[test]
    fn test_null_and_ragged_rows() {
        let columns = ["start", "target", "final", "error"];
        let err = table(&columns, json!([[0, 10, null, 0.0]]))
            .to_dataset(&english_columns())
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::MissingValue {
                row: 0,
                column: "final".to_owned()
            }
        );

        let err = table(&columns, json!([[0, 10, 10.0]]))
            .to_dataset(&english_columns())
            .unwrap_err();
        assert_eq!(
            err,
            LoadError::RaggedRow {
                row: 0,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_empty_table_is_an_empty_dataset() {
        let table = table(&["start", "target", "final", "error"], json!([]));
        assert!(table.to_dataset(&english_columns()).unwrap().is_empty());
    }

    #[test]
    fn test_coerce_numeric() {
        assert_eq!(coerce_numeric(&json!(1.5)), Some(1.5));
        assert_eq!(coerce_numeric(&json!("-2")), Some(-2.0));
        assert_eq!(coerce_numeric(&json!("NaN")), None);
        assert_eq!(coerce_numeric(&json!("inf")), None);
        assert_eq!(coerce_numeric(&json!(true)), None);
        assert_eq!(coerce_numeric(&json!([1])), None);
    }

    #[test]
    fn test_deserialize_split_layout_with_index() {
        let json = r#"{"columns":["start","target","final","error"],"index":[0],"data":[[0,1,1,0]]}"#;
        let table: SplitTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.to_dataset(&english_columns()).unwrap().len(), 1);
    }
}
