//! Zone identity and per-zone pixel dimensions.

use std::fmt;

use schemars::JsonSchema;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Canonical zone name: first character upper-cased, remainder lower-cased.
///
/// Both link zones and dimension-sheet `Server` values go through
/// [`ZoneName::canonicalize`], so a lookup with a parsed zone always matches a
/// registry key built from the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ZoneName(String);

impl ZoneName {
    /// Canonicalize a raw zone identifier.
    ///
    /// Returns `None` when the identifier is empty after trimming whitespace.
    #[must_use]
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let first = chars.next()?;

        let mut canonical: String = first.to_uppercase().collect();
        canonical.push_str(&chars.as_str().to_lowercase());
        Some(Self(canonical))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case form used for asset file prefixes.
    #[must_use]
    pub fn file_stem(&self) -> String {
        self.0.to_lowercase()
    }
}

impl<'de> Deserialize<'de> for ZoneName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::canonicalize(&raw).ok_or_else(|| D::Error::custom("zone name must not be blank"))
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pixel-space size of a zone's background image.
///
/// `width` comes from the `X Dim` column, `height` from `Y Dim`. Both are
/// strictly positive and finite; use [`ZoneDimensions::new`] to enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct ZoneDimensions {
    pub width: f64,
    pub height: f64,
}

impl ZoneDimensions {
    /// Build dimensions, rejecting non-finite or non-positive values.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        (valid(width) && valid(height)).then_some(Self { width, height })
    }

    /// Whether a pixel lies inside the image rectangle.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[derive(Deserialize)]
struct RawDimensions {
    width: f64,
    height: f64,
}

impl<'de> Deserialize<'de> for ZoneDimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawDimensions::deserialize(deserializer)?;
        Self::new(raw.width, raw.height)
            .ok_or_else(|| D::Error::custom("dimensions must be finite and positive"))
    }
}
