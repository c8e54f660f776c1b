//! End-to-end marker pipeline: raw table -> records -> filter -> scene.
//!
//! Pure apart from reading the registry. Concurrent runs for different zones
//! share nothing mutable.

use serde::Serialize;
use yaga_core::{
    CoreError, LinkParser, Omission, PlaceableRecord, RawTable, RecordAssembler, Scene,
    ZoneDimensions, ZoneName,
};

use crate::filter::{FilterCriteria, filter};
use crate::projector::project;
use crate::registry::ZoneRegistry;

#[derive(Debug, Clone, Default)]
pub struct MapPipeline {
    assembler: RecordAssembler,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutput {
    pub zone: ZoneName,
    pub dimensions: ZoneDimensions,
    pub scene: Scene,
    /// Records behind `scene.markers`, index for index.
    pub retained: Vec<PlaceableRecord>,
    pub omissions: Vec<Omission>,
}

impl PipelineOutput {
    /// Omissions caused by malformed source data.
    pub fn malformed(&self) -> impl Iterator<Item = &Omission> {
        self.omissions.iter().filter(|o| o.reason.is_malformed())
    }
}

impl MapPipeline {
    #[must_use]
    pub const fn new(parser: LinkParser) -> Self {
        Self {
            assembler: RecordAssembler::new(parser),
        }
    }

    /// Run the pipeline for one zone.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownZone`] when the criteria zone is not registered.
    /// - [`CoreError::SourceFormat`] when the marker table lacks a required
    ///   column.
    pub fn run(
        &self,
        markers: &RawTable,
        registry: &ZoneRegistry,
        criteria: &FilterCriteria,
    ) -> Result<PipelineOutput, CoreError> {
        let dimensions = registry.require(&criteria.zone)?;
        let records = self.assembler.assemble_table(markers)?;
        let outcome = filter(&records, criteria);
        let scene = project(&outcome.retained, &dimensions);

        tracing::debug!(
            zone = %criteria.zone,
            rows = records.len(),
            markers = scene.markers.len(),
            "scene projected"
        );

        Ok(PipelineOutput {
            zone: criteria.zone.clone(),
            dimensions,
            scene,
            retained: outcome.retained,
            omissions: outcome.omissions,
        })
    }
}
