//! Spreadsheet source configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Shared sheet holding `Server`, `X Dim`, `Y Dim` for every zone.
pub const DEFAULT_DIMENSIONS_SHEET_ID: &str = "1Y5VcFEg9wG8HeokzLgq0o5xv5Rqyv3-FERNs52GVR6c";

fn default_base_url() -> String {
    String::from("https://docs.google.com/spreadsheets/d")
}

fn default_dimensions_sheet_id() -> String {
    String::from(DEFAULT_DIMENSIONS_SHEET_ID)
}

fn default_dimensions_tab() -> String {
    String::from("Sheet1")
}

fn default_markers_tab() -> String {
    String::from("Map_Matrix")
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetsConfig {
    /// Spreadsheet service base URL; sheet IDs are appended as path segments.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sheet ID of the zone dimension table.
    #[serde(default = "default_dimensions_sheet_id")]
    pub dimensions_sheet_id: String,

    /// Tab name inside the dimension sheet.
    #[serde(default = "default_dimensions_tab")]
    pub dimensions_tab: String,

    /// Tab name inside an operator's marker sheet.
    #[serde(default = "default_markers_tab")]
    pub markers_tab: String,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dimensions_sheet_id: default_dimensions_sheet_id(),
            dimensions_tab: default_dimensions_tab(),
            markers_tab: default_markers_tab(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SheetsConfig {
    /// Check field values that figment cannot check by type alone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(invalid("sheets.base_url", "must be an http(s) URL"));
        }
        if self.dimensions_sheet_id.trim().is_empty() {
            return Err(invalid("sheets.dimensions_sheet_id", "must not be empty"));
        }
        if self.dimensions_tab.trim().is_empty() {
            return Err(invalid("sheets.dimensions_tab", "must not be empty"));
        }
        if self.markers_tab.trim().is_empty() {
            return Err(invalid("sheets.markers_tab", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("sheets.timeout_secs", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
