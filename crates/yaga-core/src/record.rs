//! Marker records and their assembly from raw rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::link::{LinkParser, PixelCoord};
use crate::normalize::{Completion, landmark_from_cell};
use crate::report::{Omission, OmissionReason};
use crate::table::{RawRow, RawTable};
use crate::zone::ZoneName;

pub const MAP_NAME: &str = "Map Name";
pub const MAP_LINK: &str = "Map Link";
pub const COMPLETED: &str = "Completed";
pub const LANDMARK: &str = "Landmark";

/// Columns every marker source must expose.
pub const MARKER_COLUMNS: [&str; 4] = [MAP_NAME, MAP_LINK, COMPLETED, LANDMARK];

/// Fail the whole import when a required marker column is missing.
///
/// # Errors
///
/// Returns [`CoreError::SourceFormat`] naming every missing column.
pub fn validate_marker_columns(table: &RawTable) -> Result<(), CoreError> {
    let missing = table.missing_columns(&MARKER_COLUMNS);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::SourceFormat { missing })
    }
}

/// One assembled marker row. Zone and coordinates may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MapRecord {
    /// 1-based source row.
    pub row: usize,
    pub name: String,
    pub link: String,
    pub zone: Option<ZoneName>,
    pub coords: Option<PixelCoord>,
    pub completion: Completion,
    pub landmark: bool,
}

impl MapRecord {
    #[must_use]
    pub fn omission(&self, reason: OmissionReason) -> Omission {
        Omission {
            row: self.row,
            name: self.name.clone(),
            link: self.link.clone(),
            reason,
        }
    }
}

/// A record with zone, coordinates and name all present.
///
/// Only these reach projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PlaceableRecord {
    pub row: usize,
    pub name: String,
    pub link: String,
    pub zone: ZoneName,
    pub coord: PixelCoord,
    pub completion: Completion,
    pub landmark: bool,
}

impl TryFrom<&MapRecord> for PlaceableRecord {
    type Error = OmissionReason;

    fn try_from(record: &MapRecord) -> Result<Self, Self::Error> {
        let zone = record.zone.clone().ok_or(OmissionReason::UnparseableZone)?;
        let coord = record.coords.ok_or(OmissionReason::UnparseableCoordinates)?;
        if record.name.is_empty() {
            return Err(OmissionReason::MissingName);
        }
        Ok(Self {
            row: record.row,
            name: record.name.clone(),
            link: record.link.clone(),
            zone,
            coord,
            completion: record.completion,
            landmark: record.landmark,
        })
    }
}

impl From<PlaceableRecord> for MapRecord {
    fn from(record: PlaceableRecord) -> Self {
        Self {
            row: record.row,
            name: record.name,
            link: record.link,
            zone: Some(record.zone),
            coords: Some(record.coord),
            completion: record.completion,
            landmark: record.landmark,
        }
    }
}

/// Turns raw rows into [`MapRecord`]s. Never drops a row.
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    parser: LinkParser,
}

impl RecordAssembler {
    #[must_use]
    pub const fn new(parser: LinkParser) -> Self {
        Self { parser }
    }

    #[must_use]
    pub fn assemble(&self, row: &RawRow) -> MapRecord {
        let name = row
            .get(MAP_NAME)
            .as_text()
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let link = row.get(MAP_LINK).as_text().unwrap_or_default();
        let parsed = self.parser.parse(&link);

        MapRecord {
            row: row.position,
            name,
            link,
            zone: parsed.zone,
            coords: parsed.coords,
            completion: Completion::from_cell(row.get(COMPLETED)),
            landmark: landmark_from_cell(row.get(LANDMARK)),
        }
    }

    /// Validate the table's columns, then assemble every row in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SourceFormat`] when a required column is missing.
    pub fn assemble_table(&self, table: &RawTable) -> Result<Vec<MapRecord>, CoreError> {
        validate_marker_columns(table)?;
        Ok(table.rows.iter().map(|row| self.assemble(row)).collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::table::CellValue;

    fn marker_row(position: usize, link: &str, completed: CellValue) -> RawRow {
        RawRow::new(
            position,
            [
                (MAP_NAME, CellValue::from("Crate")),
                (MAP_LINK, CellValue::from(link)),
                (COMPLETED, completed),
                (LANDMARK, CellValue::from("true")),
            ],
        )
    }

    fn marker_table(rows: Vec<RawRow>) -> RawTable {
        RawTable {
            columns: MARKER_COLUMNS.iter().map(ToString::to_string).collect(),
            rows,
        }
    }

    #[test]
    fn assembles_complete_row() {
        let assembler = RecordAssembler::new(LinkParser::new("host"));
        let record = assembler.assemble(&marker_row(
            3,
            "https://Xanadu.host/#10,20",
            CellValue::from("False"),
        ));

        assert_eq!(
            record,
            MapRecord {
                row: 3,
                name: "Crate".into(),
                link: "https://Xanadu.host/#10,20".into(),
                zone: ZoneName::canonicalize("Xanadu"),
                coords: Some(PixelCoord { x: 10, y: 20 }),
                completion: Completion::NotCompleted,
                landmark: true,
            }
        );
    }

    #[test]
    fn unparseable_link_is_carried_not_dropped() {
        let assembler = RecordAssembler::default();
        let table = marker_table(vec![
            marker_row(1, "garbage", CellValue::Null),
            marker_row(2, "https://exodus.yaga.host/#1,2", CellValue::Null),
        ]);

        let records = assembler.assemble_table(&table).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].zone, None);
        assert_eq!(records[0].coords, None);
        assert_eq!(records[0].completion, Completion::Unknown);
        assert_eq!(records[1].coords, Some(PixelCoord { x: 1, y: 2 }));
    }

    #[test]
    fn numeric_name_is_stringified() {
        let row = RawRow::new(
            1,
            [
                (MAP_NAME, CellValue::Number(42.0)),
                (MAP_LINK, CellValue::from("https://exodus.yaga.host/#1,2")),
            ],
        );
        assert_eq!(RecordAssembler::default().assemble(&row).name, "42");
    }

    #[test]
    fn missing_column_aborts_import() {
        let table = RawTable {
            columns: vec![MAP_NAME.into(), MAP_LINK.into(), COMPLETED.into()],
            rows: vec![marker_row(1, "https://exodus.yaga.host/#1,2", CellValue::Null)],
        };
        let err = RecordAssembler::default()
            .assemble_table(&table)
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::SourceFormat {
                missing: vec![LANDMARK.to_string()]
            }
        );
    }

    #[test]
    fn placeable_requires_zone_coords_and_name() {
        let assembler = RecordAssembler::default();
        let mut record =
            assembler.assemble(&marker_row(1, "https://exodus.yaga.host/", CellValue::Null));
        assert_eq!(
            PlaceableRecord::try_from(&record),
            Err(OmissionReason::UnparseableCoordinates)
        );

        record.coords = Some(PixelCoord { x: 1, y: 1 });
        record.zone = None;
        assert_eq!(
            PlaceableRecord::try_from(&record),
            Err(OmissionReason::UnparseableZone)
        );

        record.zone = ZoneName::canonicalize("exodus");
        record.name.clear();
        assert_eq!(
            PlaceableRecord::try_from(&record),
            Err(OmissionReason::MissingName)
        );
    }

    #[test]
    fn placeable_converts_back_losslessly() {
        let record = RecordAssembler::default().assemble(&marker_row(
            5,
            "https://exodus.yaga.host/#1,2",
            CellValue::Bool(true),
        ));
        let placeable = PlaceableRecord::try_from(&record).unwrap();
        assert_eq!(MapRecord::from(placeable), record);
    }
}
