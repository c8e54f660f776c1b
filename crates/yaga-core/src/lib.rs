//! # yaga-core
//!
//! Core types and row-level parsing for yagamap.
//!
//! This crate provides the foundational pieces shared across the workspace:
//! - Raw tabular input (`RawTable`, `RawRow`, `CellValue`)
//! - Zone identity canonicalization and per-zone pixel dimensions
//! - Link parsing (zone + pixel coordinates out of a marker link)
//! - Completion/landmark field normalization
//! - Record assembly (`RawRow` -> `MapRecord`)
//! - Omission and skip reports for rows that cannot be placed
//! - Render-ready scene types
//! - Cross-cutting error types

pub mod errors;
pub mod link;
pub mod normalize;
pub mod record;
pub mod report;
pub mod scene;
pub mod table;
pub mod zone;

pub use errors::CoreError;
pub use link::{LinkParser, ParsedLink, PixelCoord};
pub use normalize::Completion;
pub use record::{MapRecord, PlaceableRecord, RecordAssembler};
pub use report::{DimensionSkipReason, Omission, OmissionReason, SkippedDimensionRow};
pub use scene::{MarkerKind, PlacedMarker, Scene};
pub use table::{CellValue, RawRow, RawTable};
pub use zone::{ZoneDimensions, ZoneName};
