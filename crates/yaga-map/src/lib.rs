//! # yaga-map
//!
//! The zone-aware half of the yagamap pipeline:
//! - [`ZoneRegistry`]: per-zone pixel dimensions, built once from the
//!   dimension sheet and read-only afterwards
//! - [`filter`]: zone and completion filtering with explicit omission reports
//! - [`project`]: placement of filtered records in map space
//! - [`MapPipeline`]: raw marker table -> [`yaga_core::Scene`]

pub mod filter;
pub mod pipeline;
pub mod projector;
pub mod registry;

pub use filter::{FilterCriteria, FilterOutcome, filter};
pub use pipeline::{MapPipeline, PipelineOutput};
pub use projector::project;
pub use registry::{RegistryLoad, ZoneRegistry};
