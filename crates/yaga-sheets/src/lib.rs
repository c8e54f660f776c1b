//! # yaga-sheets
//!
//! Fetches spreadsheet tabs through the visualization-query endpoint and
//! decodes them into [`yaga_core::RawTable`]s. Nothing here interprets the
//! rows; column validation and parsing live in `yaga-core` / `yaga-map`.

mod error;
mod gviz;
mod http;
mod sheet_id;

pub use error::SheetsError;
pub use gviz::parse_gviz;
pub use sheet_id::sheet_id_from_url;

use std::time::Duration;

use yaga_core::RawTable;

use crate::http::check_response;

/// HTTP client for public spreadsheet tabs.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetsClient {
    /// Create a client for `base_url` (e.g.
    /// `https://docs.google.com/spreadsheets/d`).
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SheetsError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("yagamap/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Query URL for one tab of one sheet.
    #[must_use]
    pub fn table_url(&self, sheet_id: &str, tab: &str) -> String {
        format!(
            "{}/{}/gviz/tq?tqx=out:json&sheet={}",
            self.base_url,
            urlencoding::encode(sheet_id),
            urlencoding::encode(tab)
        )
    }

    /// Fetch and decode one tab.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError`] if the request fails, the service returns a
    /// non-success status, or the payload cannot be decoded.
    pub async fn fetch_table(&self, sheet_id: &str, tab: &str) -> Result<RawTable, SheetsError> {
        let url = self.table_url(sheet_id, tab);
        tracing::debug!(sheet_id, tab, "fetching sheet");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        let table = parse_gviz(&body)?;

        tracing::debug!(
            sheet_id,
            tab,
            columns = table.columns.len(),
            rows = table.rows.len(),
            "sheet fetched"
        );
        Ok(table)
    }
}
