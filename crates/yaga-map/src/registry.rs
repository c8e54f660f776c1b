//! Per-zone pixel dimensions.
//!
//! A [`ZoneRegistry`] is built wholesale from the dimension sheet and has no
//! mutating methods. Refreshing means building a new one, so readers never
//! observe a half-updated registry.

use std::collections::BTreeMap;

use serde::Serialize;
use yaga_core::report::{DimensionSkipReason, SkippedDimensionRow};
use yaga_core::{CoreError, RawRow, RawTable, ZoneDimensions, ZoneName};

pub const SERVER: &str = "Server";
pub const X_DIM: &str = "X Dim";
pub const Y_DIM: &str = "Y Dim";

/// Canonical zone name -> dimensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ZoneRegistry {
    zones: BTreeMap<ZoneName, ZoneDimensions>,
}

/// A freshly built registry plus the rows that could not be used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistryLoad {
    pub registry: ZoneRegistry,
    pub skipped: Vec<SkippedDimensionRow>,
}

impl ZoneRegistry {
    /// Build a registry from the dimension sheet.
    ///
    /// Rows lacking `Server`, `X Dim`, or `Y Dim`, or carrying unusable
    /// dimensions, are skipped, logged, and returned in
    /// [`RegistryLoad::skipped`].
    #[must_use]
    pub fn from_table(table: &RawTable) -> RegistryLoad {
        Self::from_rows(&table.rows)
    }

    #[must_use]
    pub fn from_rows(rows: &[RawRow]) -> RegistryLoad {
        let mut zones = BTreeMap::new();
        let mut skipped = Vec::new();

        for row in rows {
            match parse_row(row) {
                Ok((zone, dims)) => {
                    if let Some(previous) = zones.insert(zone.clone(), dims) {
                        tracing::debug!(
                            row = row.position,
                            %zone,
                            ?previous,
                            "duplicate dimension row replaces earlier entry"
                        );
                    }
                }
                Err(skip) => {
                    skip.log();
                    skipped.push(skip);
                }
            }
        }

        tracing::debug!(zones = zones.len(), skipped = skipped.len(), "zone registry built");
        RegistryLoad {
            registry: Self { zones },
            skipped,
        }
    }

    #[must_use]
    pub fn lookup(&self, zone: &ZoneName) -> Option<ZoneDimensions> {
        self.zones.get(zone).copied()
    }

    /// Dimensions for `zone`, or a request-level error.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownZone`] when the zone is not registered.
    pub fn require(&self, zone: &ZoneName) -> Result<ZoneDimensions, CoreError> {
        self.lookup(zone).ok_or_else(|| CoreError::UnknownZone {
            zone: zone.to_string(),
        })
    }

    /// Entries in zone-name order.
    pub fn zones(&self) -> impl Iterator<Item = (&ZoneName, &ZoneDimensions)> {
        self.zones.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl FromIterator<(ZoneName, ZoneDimensions)> for ZoneRegistry {
    fn from_iter<I: IntoIterator<Item = (ZoneName, ZoneDimensions)>>(iter: I) -> Self {
        Self {
            zones: iter.into_iter().collect(),
        }
    }
}

fn parse_row(row: &RawRow) -> Result<(ZoneName, ZoneDimensions), SkippedDimensionRow> {
    let server_text = row.get(SERVER).as_text();
    let skip = |reason| SkippedDimensionRow {
        row: row.position,
        server: server_text.clone(),
        reason,
    };

    let missing: Vec<String> = [SERVER, X_DIM, Y_DIM]
        .into_iter()
        .filter(|label| is_blank(row, label))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(skip(DimensionSkipReason::MissingFields { fields: missing }));
    }

    let zone = server_text
        .as_deref()
        .and_then(ZoneName::canonicalize)
        .ok_or_else(|| {
            skip(DimensionSkipReason::MissingFields {
                fields: vec![SERVER.to_string()],
            })
        })?;

    let width = dimension(row, X_DIM).map_err(&skip)?;
    let height = dimension(row, Y_DIM).map_err(&skip)?;
    let dims = ZoneDimensions::new(width, height).ok_or_else(|| {
        skip(DimensionSkipReason::InvalidValue {
            field: format!("{X_DIM}/{Y_DIM}"),
            value: format!("{width}x{height}"),
        })
    })?;

    Ok((zone, dims))
}

fn is_blank(row: &RawRow, label: &str) -> bool {
    row.get(label)
        .as_text()
        .is_none_or(|text| text.trim().is_empty())
}

fn dimension(row: &RawRow, label: &str) -> Result<f64, DimensionSkipReason> {
    let cell = row.get(label);
    cell.as_f64()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| DimensionSkipReason::InvalidValue {
            field: label.to_string(),
            value: cell.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use yaga_core::CellValue;

    use super::*;

    fn dim_row(position: usize, server: CellValue, x: CellValue, y: CellValue) -> RawRow {
        RawRow::new(position, [(SERVER, server), (X_DIM, x), (Y_DIM, y)])
    }

    fn num(value: f64) -> CellValue {
        CellValue::Number(value)
    }

    fn zone(name: &str) -> ZoneName {
        ZoneName::canonicalize(name).unwrap()
    }

    #[test]
    fn builds_from_numbers_and_numeric_text() {
        let load = ZoneRegistry::from_rows(&[
            dim_row(1, "xanadu".into(), num(100.0), num(200.0)),
            dim_row(2, "HARMONY".into(), "4096".into(), " 2048 ".into()),
        ]);

        assert!(load.skipped.is_empty());
        assert_eq!(load.registry.len(), 2);
        assert_eq!(
            load.registry.lookup(&zone("Xanadu")),
            ZoneDimensions::new(100.0, 200.0)
        );
        assert_eq!(
            load.registry.lookup(&zone("harmony")),
            ZoneDimensions::new(4096.0, 2048.0)
        );
    }

    #[test]
    fn server_canonicalization_matches_link_zones() {
        let load = ZoneRegistry::from_rows(&[dim_row(
            1,
            "mElOdY".into(),
            num(10.0),
            num(10.0),
        )]);
        let keys: Vec<&str> = load.registry.zones().map(|(z, _)| z.as_str()).collect();
        assert_eq!(keys, vec!["Melody"]);
    }

    #[test]
    fn rows_with_missing_fields_are_skipped_and_reported() {
        let load = ZoneRegistry::from_rows(&[
            dim_row(1, "chaos".into(), CellValue::Null, "  ".into()),
            dim_row(2, CellValue::Null, num(5.0), num(5.0)),
            dim_row(3, "exodus".into(), num(5.0), num(5.0)),
        ]);

        assert_eq!(load.registry.len(), 1);
        assert_eq!(
            load.skipped,
            vec![
                SkippedDimensionRow {
                    row: 1,
                    server: Some("chaos".into()),
                    reason: DimensionSkipReason::MissingFields {
                        fields: vec![X_DIM.into(), Y_DIM.into()],
                    },
                },
                SkippedDimensionRow {
                    row: 2,
                    server: None,
                    reason: DimensionSkipReason::MissingFields {
                        fields: vec![SERVER.into()],
                    },
                },
            ]
        );
    }

    #[test]
    fn invalid_dimensions_are_skipped() {
        let load = ZoneRegistry::from_rows(&[
            dim_row(1, "desertion".into(), "wide".into(), num(5.0)),
            dim_row(2, "affliction".into(), num(5.0), num(0.0)),
        ]);

        assert!(load.registry.is_empty());
        assert_eq!(
            load.skipped[0].reason,
            DimensionSkipReason::InvalidValue {
                field: X_DIM.into(),
                value: "wide".into(),
            }
        );
        assert_eq!(
            load.skipped[1].reason,
            DimensionSkipReason::InvalidValue {
                field: Y_DIM.into(),
                value: "0".into(),
            }
        );
    }

    #[test]
    fn later_duplicate_replaces_earlier() {
        let load = ZoneRegistry::from_rows(&[
            dim_row(1, "serenity".into(), num(1.0), num(1.0)),
            dim_row(2, "Serenity".into(), num(2.0), num(3.0)),
        ]);
        assert_eq!(
            load.registry.lookup(&zone("serenity")),
            ZoneDimensions::new(2.0, 3.0)
        );
    }

    #[test]
    fn require_unknown_zone_is_an_error() {
        let registry: ZoneRegistry =
            [(zone("xanadu"), ZoneDimensions::new(100.0, 200.0).unwrap())]
                .into_iter()
                .collect();

        assert!(registry.require(&zone("xanadu")).is_ok());
        assert_eq!(
            registry.require(&zone("defiance")).unwrap_err(),
            CoreError::UnknownZone {
                zone: "Defiance".into()
            }
        );
    }
}
