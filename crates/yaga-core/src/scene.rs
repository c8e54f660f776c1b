//! Render-ready scene description.
//!
//! Coordinates are in map space: `[y, x]` pairs with y growing upward from
//! the bottom edge of the background image. A renderer needs nothing beyond
//! these types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a marker is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Star,
    Circle,
}

impl MarkerKind {
    #[must_use]
    pub const fn for_landmark(landmark: bool) -> Self {
        if landmark { Self::Star } else { Self::Circle }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlacedMarker {
    pub map_y: f64,
    pub map_x: f64,
    pub kind: MarkerKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// `[[0, 0], [height, width]]`.
    pub image_bounds: [[f64; 2]; 2],
    /// Markers in source order.
    pub markers: Vec<PlacedMarker>,
}
