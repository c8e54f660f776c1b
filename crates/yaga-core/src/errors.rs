//! Fatal error types for yagamap.
//!
//! Per-row problems (unparseable links, incomplete dimension rows) are not
//! errors: they are carried as [`crate::report`] values and logged. The
//! variants here abort an import, a request, or a render.

use thiserror::Error;

/// Errors that stop a pipeline invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The marker source is missing one or more required columns.
    #[error("Marker source is missing required columns: {}", missing.join(", "))]
    SourceFormat { missing: Vec<String> },

    /// The requested zone has no entry in the dimension registry.
    #[error("Unknown zone '{zone}': no dimensions registered")]
    UnknownZone { zone: String },

    /// No background image exists for the zone.
    #[error("No background image for zone '{zone}' in {dir}")]
    MissingAsset { zone: String, dir: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_format_lists_all_missing_columns() {
        let err = CoreError::SourceFormat {
            missing: vec!["Map Link".into(), "Landmark".into()],
        };
        assert_eq!(
            err.to_string(),
            "Marker source is missing required columns: Map Link, Landmark"
        );
    }

    #[test]
    fn unknown_zone_names_the_zone() {
        let err = CoreError::UnknownZone {
            zone: "Chaos".into(),
        };
        assert!(err.to_string().contains("'Chaos'"));
    }
}
