//! Sheet ID extraction from operator-supplied links.

use crate::error::SheetsError;

/// Extract the sheet ID from a share link such as
/// `https://docs.google.com/spreadsheets/d/<id>/edit#gid=0`.
///
/// A bare ID (no `/`, no whitespace) is accepted unchanged.
///
/// # Errors
///
/// Returns [`SheetsError::InvalidSheetLink`] when no ID can be found.
pub fn sheet_id_from_url(link: &str) -> Result<String, SheetsError> {
    let link = link.trim();
    let invalid = || SheetsError::InvalidSheetLink(link.to_string());

    let id = match link.split_once("/d/") {
        Some((_, rest)) => rest
            .split(['/', '?', '#'])
            .next()
            .unwrap_or_default(),
        None if !link.contains('/') && !link.contains(char::is_whitespace) => link,
        None => return Err(invalid()),
    };

    if id.is_empty() {
        return Err(invalid());
    }
    Ok(id.to_string())
}
