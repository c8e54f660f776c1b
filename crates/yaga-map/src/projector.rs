//! Placement of records in map space.
//!
//! Source coordinates are image pixels with row 0 at the top. Map space puts
//! row 0 at the bottom, so `mapY = height - y`. `mapX = x` unchanged.

use yaga_core::{MarkerKind, PlaceableRecord, PlacedMarker, Scene, ZoneDimensions};

/// Build the scene for `records` over an image of size `dims`.
///
/// Output order follows input order; duplicates are kept.
#[must_use]
pub fn project(records: &[PlaceableRecord], dims: &ZoneDimensions) -> Scene {
    let markers = records
        .iter()
        .map(|record| {
            let x = f64::from(record.coord.x);
            let y = f64::from(record.coord.y);
            if !dims.contains(x, y) {
                tracing::debug!(
                    row = record.row,
                    name = %record.name,
                    x,
                    y,
                    width = dims.width,
                    height = dims.height,
                    "marker lies outside the background image"
                );
            }
            PlacedMarker {
                map_y: dims.height - y,
                map_x: x,
                kind: MarkerKind::for_landmark(record.landmark),
                label: record.name.clone(),
            }
        })
        .collect();

    Scene {
        image_bounds: [[0.0, 0.0], [dims.height, dims.width]],
        markers,
    }
}
