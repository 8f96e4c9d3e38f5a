//! The canonical in-memory representation of a parsed dataset
//!
//! A [`Dataset`] holds an ordered column schema, an ordered sequence of
//! [`Record`]s, the source format tag, and an origin label used only for
//! generating output names. A parsed dataset is never mutated: the masking
//! engine builds a fresh `Dataset` so that callers holding a reference to
//! the pre-mask data observe no change.

use crate::domain::errors::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Source format of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFormat {
    /// Comma-separated values with RFC4180-style quoting
    Delimited,
    /// JSON array of flat key-value objects
    Structured,
}

impl DataFormat {
    /// Default file extension for output files in this format
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Delimited => "csv",
            DataFormat::Structured => "json",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::Delimited => write!(f, "delimited"),
            DataFormat::Structured => write!(f, "structured"),
        }
    }
}

impl FromStr for DataFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" | "delimited" => Ok(DataFormat::Delimited),
            "json" | "structured" => Ok(DataFormat::Structured),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// A single data row: column identifier → string value
///
/// A record's key set need not include every dataset column. Absent and
/// empty values are distinguished only at the serialization boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for a column, if present
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Value for a column, or empty string if absent
    pub fn get_or_empty(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Set the value of a column
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    /// Columns populated in this record
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of populated columns
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no populated columns
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// An in-memory tabular dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Source format tag, used to pick the default output codec
    pub format: DataFormat,
    /// Ordered column schema; order is significant for serialization
    pub columns: Vec<String>,
    /// Rows in input order, preserved through masking
    pub rows: Vec<Record>,
    /// Origin label (e.g. a file name); only used for output naming
    pub origin: String,
}

impl Dataset {
    /// Create a new dataset
    pub fn new(
        format: DataFormat,
        columns: Vec<String>,
        rows: Vec<Record>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            format,
            columns,
            rows,
            origin: origin.into(),
        }
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of schema columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether the dataset has no rows or no columns
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }
}

/// Result of a codec parse operation
///
/// Carries the parsed dataset plus a skipped-row counter for diagnostics.
/// Delimited rows with a field count that disagrees with the header are
/// skipped, not fatal; structured input never skips rows.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// The parsed dataset
    pub dataset: Dataset,
    /// Rows dropped because their field count did not match the header
    pub skipped_rows: usize,
}

/// Result of a masking run
#[derive(Debug, Clone)]
pub struct MaskOutcome {
    /// The transformed dataset; the source dataset is left untouched
    pub dataset: Dataset,
    /// Cells that were non-empty, in a selected column, and rewritten
    pub masked_count: usize,
    /// `row_count × selected_column_count`, independent of cell content
    pub total_cells: usize,
    /// Wall-clock time for the full batch transform
    pub elapsed: Duration,
}

impl MaskOutcome {
    /// Fraction of selected cells actually masked, 0.0 when nothing was
    /// selected
    pub fn masked_fraction(&self) -> f64 {
        if self.total_cells == 0 {
            return 0.0;
        }
        self.masked_count as f64 / self.total_cells as f64
    }
}
