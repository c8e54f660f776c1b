//! Serde roundtrip and JsonSchema validation tests for the public output types.

use schemars::schema_for;
use yaga_core::link::{ParsedLink, PixelCoord};
use yaga_core::report::{DimensionSkipReason, Omission, OmissionReason, SkippedDimensionRow};
use yaga_core::{Completion, MapRecord, MarkerKind, PlacedMarker, Scene, ZoneName};

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn zone(name: &str) -> ZoneName {
    ZoneName::canonicalize(name).expect("non-empty zone")
}

roundtrip_and_validate!(
    scene_roundtrip,
    Scene,
    Scene {
        image_bounds: [[0.0, 0.0], [200.0, 100.0]],
        markers: vec![
            PlacedMarker {
                map_y: 180.0,
                map_x: 10.0,
                kind: MarkerKind::Star,
                label: "Crate".into(),
            },
            PlacedMarker {
                map_y: 0.5,
                map_x: 99.0,
                kind: MarkerKind::Circle,
                label: "Crate".into(),
            },
        ],
    }
);

roundtrip_and_validate!(
    empty_scene_roundtrip,
    Scene,
    Scene {
        image_bounds: [[0.0, 0.0], [1.0, 1.0]],
        markers: Vec::new(),
    }
);

roundtrip_and_validate!(
    map_record_roundtrip,
    MapRecord,
    MapRecord {
        row: 4,
        name: "Lighthouse".into(),
        link: "https://harmony.yaga.host/#512,640".into(),
        zone: Some(zone("harmony")),
        coords: Some(PixelCoord { x: 512, y: 640 }),
        completion: Completion::Unknown,
        landmark: true,
    }
);

roundtrip_and_validate!(
    unparseable_map_record_roundtrip,
    MapRecord,
    MapRecord {
        row: 9,
        name: "Broken".into(),
        link: "not a link".into(),
        zone: None,
        coords: None,
        completion: Completion::Completed,
        landmark: false,
    }
);

roundtrip_and_validate!(
    omission_roundtrip,
    Omission,
    Omission {
        row: 2,
        name: "Crate".into(),
        link: "https://exodus.yaga.host/#1,2".into(),
        reason: OmissionReason::OtherZone {
            zone: zone("exodus"),
        },
    }
);

roundtrip_and_validate!(
    skipped_dimension_row_roundtrip,
    SkippedDimensionRow,
    SkippedDimensionRow {
        row: 3,
        server: Some("Chaos".into()),
        reason: DimensionSkipReason::MissingFields {
            fields: vec!["X Dim".into()],
        },
    }
);

roundtrip_and_validate!(
    parsed_link_roundtrip,
    ParsedLink,
    ParsedLink {
        zone: Some(zone("release")),
        coords: None,
    }
);
