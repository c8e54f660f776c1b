//! Spreadsheet client error types.

use thiserror::Error;

/// Errors that can occur when fetching a sheet.
#[derive(Debug, Error)]
pub enum SheetsError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The spreadsheet service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The service returned a 429 Too Many Requests response.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body is not a visualization-query payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// The query itself failed (bad tab name, private sheet, ...).
    #[error("sheet query failed: {0}")]
    Query(String),

    /// The operator-supplied sheet link has no sheet ID.
    #[error("invalid sheet link '{0}': expected https://docs.google.com/spreadsheets/d/<id>/...")]
    InvalidSheetLink(String),
}
