//! Raw tabular input as delivered by the spreadsheet source.
//!
//! Cells are loosely typed: a coordinate sheet may deliver `100` as a number
//! on one row and `"100"` as text on the next. Nothing here interprets cells
//! beyond stringifying or reading them as numbers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

static NULL_CELL: CellValue = CellValue::Null;

impl CellValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Text form of the cell, `None` for null.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Numeric value of the cell. Numeric text is accepted.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Null | Self::Bool(_) => None,
        }
    }

    /// Stringified, trimmed, lower-cased form used for flag comparison.
    ///
    /// Null stringifies to `"none"`, which never equals `"true"` or `"false"`.
    #[must_use]
    pub fn normalized(&self) -> String {
        match self {
            Self::Null => String::from("none"),
            other => other.to_string().trim().to_lowercase(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// One source row: column label -> cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawRow {
    /// 1-based position of the row in its source table.
    pub position: usize,
    pub cells: BTreeMap<String, CellValue>,
}

impl RawRow {
    pub fn new<I, K, V>(position: usize, cells: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            position,
            cells: cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Cell for `label`; absent labels read as null.
    #[must_use]
    pub fn get(&self, label: &str) -> &CellValue {
        self.cells.get(label).unwrap_or(&NULL_CELL)
    }
}

/// A whole table: ordered column labels plus rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Required labels that are not among this table's columns, in the order
    /// given.
    #[must_use]
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|label| !self.columns.iter().any(|c| c == *label))
            .map(|label| (*label).to_string())
            .collect()
    }
}
