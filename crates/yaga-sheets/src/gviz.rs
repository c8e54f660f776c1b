//! Visualization-query (`gviz/tq?tqx=out:json`) payload parsing.
//!
//! The endpoint answers with JSON wrapped in a JavaScript callback:
//!
//! ```text
//! /*O_o*/
//! google.visualization.Query.setResponse({"status":"ok","table":{...}});
//! ```
//!
//! Everything outside the outermost braces is discarded before decoding.

use serde::Deserialize;
use yaga_core::{CellValue, RawRow, RawTable};

use crate::error::SheetsError;

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    errors: Vec<QueryError>,
    table: Option<QueryTable>,
}

#[derive(Deserialize)]
struct QueryError {
    #[serde(default)]
    reason: Option<String>,
    #[serde(default)]
    detailed_message: Option<String>,
}

#[derive(Deserialize)]
struct QueryTable {
    cols: Vec<QueryColumn>,
    #[serde(default)]
    rows: Vec<QueryRow>,
}

#[derive(Deserialize)]
struct QueryColumn {
    #[serde(default)]
    label: String,
}

#[derive(Deserialize)]
struct QueryRow {
    #[serde(default)]
    c: Vec<Option<QueryCell>>,
}

#[derive(Deserialize)]
struct QueryCell {
    #[serde(default)]
    v: CellValue,
}

/// Decode a visualization-query response body into a [`RawTable`].
///
/// # Errors
///
/// - [`SheetsError::Parse`] when the body holds no JSON object or the JSON
///   does not have the expected shape.
/// - [`SheetsError::Query`] when the service reports a failed query.
pub fn parse_gviz(body: &str) -> Result<RawTable, SheetsError> {
    let json = unwrap_callback(body)?;
    let response: QueryResponse =
        serde_json::from_str(json).map_err(|e| SheetsError::Parse(e.to_string()))?;

    if response.status.as_deref() == Some("error") {
        return Err(SheetsError::Query(describe_errors(&response.errors)));
    }
    let table = response
        .table
        .ok_or_else(|| SheetsError::Parse(String::from("response has no table")))?;

    let columns: Vec<String> = table.cols.into_iter().map(|c| c.label).collect();
    let rows = table
        .rows
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            let mut cells = row.c.into_iter();
            let values = columns.iter().map(|label| {
                let value = cells.next().flatten().map(|cell| cell.v).unwrap_or_default();
                (label.clone(), value)
            });
            RawRow::new(index + 1, values)
        })
        .collect();

    Ok(RawTable { columns, rows })
}

fn unwrap_callback(body: &str) -> Result<&str, SheetsError> {
    let start = body.find('{');
    let end = body.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&body[start..=end]),
        _ => Err(SheetsError::Parse(String::from(
            "response body contains no JSON object",
        ))),
    }
}

fn describe_errors(errors: &[QueryError]) -> String {
    if errors.is_empty() {
        return String::from("unknown error");
    }
    errors
        .iter()
        .map(|e| {
            e.detailed_message
                .as_deref()
                .or(e.reason.as_deref())
                .unwrap_or("unknown error")
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("; ")
}
