//! Normalization of the free-text `Completed` and `Landmark` columns.
//!
//! Both columns are stringified, trimmed and case-folded first. Landmark is a
//! plain boolean. Completion keeps a third state, because only an explicit
//! `"true"` hides a marker: blank, null, or unrecognized text stays visible.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::table::CellValue;

/// Completion state of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    Completed,
    NotCompleted,
    Unknown,
}

impl Completion {
    #[must_use]
    pub fn from_cell(cell: &CellValue) -> Self {
        match cell.normalized().as_str() {
            "true" => Self::Completed,
            "false" => Self::NotCompleted,
            _ => Self::Unknown,
        }
    }

    /// Whether a marker in this state is shown when completed markers are
    /// hidden.
    #[must_use]
    pub const fn visible_by_default(self) -> bool {
        matches!(self, Self::NotCompleted | Self::Unknown)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::NotCompleted => "not_completed",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` only for a cell reading `true` after trimming and case folding.
#[must_use]
pub fn landmark_from_cell(cell: &CellValue) -> bool {
    cell.normalized() == "true"
}
