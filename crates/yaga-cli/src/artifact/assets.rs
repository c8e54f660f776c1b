//! Background image lookup.

use std::path::{Path, PathBuf};

use yaga_core::{CoreError, ZoneName};

/// Find the background image for `zone`: the first `<zone lowercase>*.png`
/// in `assets_dir`, by file name.
///
/// # Errors
///
/// Returns [`CoreError::MissingAsset`] when the directory cannot be read or
/// holds no matching image.
pub fn find_background(assets_dir: &Path, zone: &ZoneName) -> Result<PathBuf, CoreError> {
    let missing = || CoreError::MissingAsset {
        zone: zone.to_string(),
        dir: assets_dir.display().to_string(),
    };
    let stem = zone.file_stem();

    let entries = std::fs::read_dir(assets_dir).map_err(|error| {
        tracing::debug!(dir = %assets_dir.display(), %error, "assets directory unreadable");
        missing()
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_file()))
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with(&stem) && name.ends_with(".png"))
        })
        .map(|entry| entry.path())
        .collect();
    candidates.sort();

    candidates.into_iter().next().ok_or_else(missing)
}
