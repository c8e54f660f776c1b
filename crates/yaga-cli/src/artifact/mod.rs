//! Rendered map files.

mod assets;
mod html;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use yaga_core::{Scene, ZoneName};

pub use assets::find_background;

/// Write an HTML map for `scene` into `output_dir` and return its path.
///
/// Every call creates a new uniquely named file, so concurrent renders never
/// overwrite each other.
pub fn write_map(
    output_dir: &Path,
    zone: &ZoneName,
    scene: &Scene,
    background: &Path,
) -> anyhow::Result<PathBuf> {
    let background = std::fs::canonicalize(background)
        .with_context(|| format!("failed to resolve {}", background.display()))?;
    let page = html::render_page(zone, scene, &file_url(&background))
        .context("failed to serialize scene")?;

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let mut file = tempfile::Builder::new()
        .prefix(&format!("{}-", zone.file_stem()))
        .suffix(".html")
        .tempfile_in(output_dir)
        .with_context(|| format!("failed to create map file in {}", output_dir.display()))?;
    file.write_all(page.as_bytes())
        .context("failed to write map file")?;

    let (_, path) = file.keep().context("failed to persist map file")?;
    tracing::info!(path = %path.display(), markers = scene.markers.len(), "map written");
    Ok(path)
}

fn file_url(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    let encoded = text
        .split('/')
        .map(|segment| {
            if is_drive(segment) {
                segment.to_owned()
            } else {
                urlencoding::encode(segment).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("/");
    if encoded.starts_with('/') {
        format!("file://{encoded}")
    } else {
        format!("file:///{encoded}")
    }
}

/// Windows drive prefix such as `C:`.
fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
