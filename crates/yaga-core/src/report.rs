//! Per-row exclusion reports.
//!
//! Every row that does not end up on the map produces one of these values,
//! attributable to its source row. Malformed-data omissions are logged at
//! WARN, ordinary filtering at DEBUG, so the two never blur together.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::zone::ZoneName;

/// Why a marker record was left out of the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OmissionReason {
    /// The link has no recognizable zone.
    UnparseableZone,
    /// The link has no `#<x>,<y>` pair.
    UnparseableCoordinates,
    /// The `Map Name` cell is empty.
    MissingName,
    /// The record belongs to another zone.
    OtherZone { zone: ZoneName },
    /// The record is completed and completed records are hidden.
    Completed,
}

impl OmissionReason {
    /// Whether the omission points at bad source data rather than filtering.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::UnparseableZone | Self::UnparseableCoordinates | Self::MissingName
        )
    }
}

impl fmt::Display for OmissionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnparseableZone => f.write_str("link has no zone"),
            Self::UnparseableCoordinates => f.write_str("link has no coordinates"),
            Self::MissingName => f.write_str("map name is empty"),
            Self::OtherZone { zone } => write!(f, "belongs to zone {zone}"),
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// A marker record excluded from the scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Omission {
    /// 1-based source row.
    pub row: usize,
    pub name: String,
    pub link: String,
    pub reason: OmissionReason,
}

impl Omission {
    /// Emit the omission to the log at a level matching its reason.
    pub fn log(&self) {
        if self.reason.is_malformed() {
            tracing::warn!(
                row = self.row,
                name = %self.name,
                link = %self.link,
                reason = %self.reason,
                "marker row omitted: malformed source data"
            );
        } else {
            tracing::debug!(
                row = self.row,
                name = %self.name,
                reason = %self.reason,
                "marker row filtered out"
            );
        }
    }
}

/// Why a dimension row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DimensionSkipReason {
    /// One or more of `Server`, `X Dim`, `Y Dim` is null or blank.
    MissingFields { fields: Vec<String> },
    /// A dimension is non-numeric, non-finite, or not positive.
    InvalidValue { field: String, value: String },
}

impl fmt::Display for DimensionSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => write!(f, "missing {}", fields.join(", ")),
            Self::InvalidValue { field, value } => write!(f, "invalid {field} '{value}'"),
        }
    }
}

/// A dimension-sheet row left out of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SkippedDimensionRow {
    /// 1-based source row.
    pub row: usize,
    pub server: Option<String>,
    pub reason: DimensionSkipReason,
}

impl SkippedDimensionRow {
    pub fn log(&self) {
        tracing::warn!(
            row = self.row,
            server = self.server.as_deref().unwrap_or("-"),
            reason = %self.reason,
            "dimension row skipped"
        );
    }
}
