//! Zone and completion filtering.
//!
//! A record is kept when it is placeable (zone, coordinates and name present),
//! belongs to the requested zone, and is either visible by default or
//! completed records were requested. Every other record yields an
//! [`Omission`], logged as it is produced.

use serde::Serialize;
use yaga_core::{MapRecord, Omission, OmissionReason, PlaceableRecord, ZoneName};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub zone: ZoneName,
    pub include_completed: bool,
}

impl FilterCriteria {
    #[must_use]
    pub const fn new(zone: ZoneName, include_completed: bool) -> Self {
        Self {
            zone,
            include_completed,
        }
    }
}

/// Records kept by [`filter`] and the omissions for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Kept records in input order.
    pub retained: Vec<PlaceableRecord>,
    pub omissions: Vec<Omission>,
}

#[must_use]
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> FilterOutcome
where
    I: IntoIterator<Item = &'a MapRecord>,
{
    let mut outcome = FilterOutcome::default();

    for record in records {
        match admit(record, criteria) {
            Ok(placeable) => outcome.retained.push(placeable),
            Err(reason) => {
                let omission = record.omission(reason);
                omission.log();
                outcome.omissions.push(omission);
            }
        }
    }

    tracing::debug!(
        zone = %criteria.zone,
        retained = outcome.retained.len(),
        omitted = outcome.omissions.len(),
        "records filtered"
    );
    outcome
}

fn admit(record: &MapRecord, criteria: &FilterCriteria) -> Result<PlaceableRecord, OmissionReason> {
    let placeable = PlaceableRecord::try_from(record)?;

    if placeable.zone != criteria.zone {
        return Err(OmissionReason::OtherZone {
            zone: placeable.zone,
        });
    }
    if !criteria.include_completed && !placeable.completion.visible_by_default() {
        return Err(OmissionReason::Completed);
    }
    Ok(placeable)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use yaga_core::{Completion, PixelCoord};

    use super::*;

    fn zone(name: &str) -> ZoneName {
        ZoneName::canonicalize(name).unwrap()
    }

    fn record(row: usize, zone_name: Option<&str>, completion: Completion) -> MapRecord {
        MapRecord {
            row,
            name: format!("Map {row}"),
            link: String::new(),
            zone: zone_name.map(zone),
            coords: Some(PixelCoord { x: 1, y: 2 }),
            completion,
            landmark: false,
        }
    }

    fn rows(outcome: &FilterOutcome) -> Vec<usize> {
        outcome.retained.iter().map(|r| r.row).collect()
    }

    #[test]
    fn keeps_matching_zone_and_visible_completion() {
        let records = vec![
            record(1, Some("xanadu"), Completion::NotCompleted),
            record(2, Some("xanadu"), Completion::Unknown),
            record(3, Some("xanadu"), Completion::Completed),
            record(4, Some("exodus"), Completion::NotCompleted),
        ];
        let outcome = filter(&records, &FilterCriteria::new(zone("Xanadu"), false));

        assert_eq!(rows(&outcome), vec![1, 2]);
        assert_eq!(
            outcome
                .omissions
                .iter()
                .map(|o| (o.row, o.reason.clone()))
                .collect::<Vec<_>>(),
            vec![
                (3, OmissionReason::Completed),
                (
                    4,
                    OmissionReason::OtherZone {
                        zone: zone("exodus")
                    }
                ),
            ]
        );
        assert!(outcome.omissions.iter().all(|o| !o.reason.is_malformed()));
    }

    #[test]
    fn include_completed_keeps_completed_records() {
        let records = vec![
            record(1, Some("xanadu"), Completion::Completed),
            record(2, Some("xanadu"), Completion::NotCompleted),
        ];
        let outcome = filter(&records, &FilterCriteria::new(zone("xanadu"), true));
        assert_eq!(rows(&outcome), vec![1, 2]);
        assert!(outcome.omissions.is_empty());
    }

    #[test]
    fn unplaceable_records_are_reported_as_malformed() {
        let mut no_coords = record(1, Some("xanadu"), Completion::NotCompleted);
        no_coords.coords = None;
        let no_zone = record(2, None, Completion::NotCompleted);

        let records = vec![no_coords, no_zone];
        let outcome = filter(&records, &FilterCriteria::new(zone("xanadu"), true));

        assert!(outcome.retained.is_empty());
        let malformed: Vec<_> = outcome
            .omissions
            .iter()
            .filter(|o| o.reason.is_malformed())
            .map(|o| o.reason.clone())
            .collect();
        assert_eq!(
            malformed,
            vec![
                OmissionReason::UnparseableCoordinates,
                OmissionReason::UnparseableZone
            ]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            record(1, Some("xanadu"), Completion::NotCompleted),
            record(2, Some("xanadu"), Completion::Completed),
            record(3, None, Completion::Unknown),
            record(4, Some("xanadu"), Completion::Unknown),
        ];
        let criteria = FilterCriteria::new(zone("xanadu"), false);

        let first = filter(&records, &criteria);
        let again: Vec<MapRecord> = first.retained.iter().cloned().map(MapRecord::from).collect();
        let second = filter(&again, &criteria);

        assert_eq!(second.retained, first.retained);
        assert!(second.omissions.is_empty());
    }
}
