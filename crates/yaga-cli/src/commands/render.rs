use anyhow::Context;
use serde::Serialize;
use yaga_core::{Omission, PlaceableRecord, Scene, SkippedDimensionRow, ZoneDimensions, ZoneName};
use yaga_map::{FilterCriteria, MapPipeline};
use yaga_sheets::sheet_id_from_url;

use crate::artifact;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RenderArgs;
use crate::context::AppContext;
use crate::output::{Tabular, flag, output};

#[derive(Debug, Serialize)]
struct RenderResponse {
    zone: ZoneName,
    dimensions: ZoneDimensions,
    scene: Scene,
    rows: Vec<OverviewRow>,
    omissions: Vec<Omission>,
    skipped_dimension_rows: Vec<SkippedDimensionRow>,
    map_path: Option<String>,
}

/// One retained marker as shown in the overview table.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct OverviewRow {
    map_name: String,
    server: ZoneName,
    x: u32,
    y: u32,
    landmark: bool,
}

impl From<&PlaceableRecord> for OverviewRow {
    fn from(record: &PlaceableRecord) -> Self {
        Self {
            map_name: record.name.clone(),
            server: record.zone.clone(),
            x: record.coord.x,
            y: record.coord.y,
            landmark: record.landmark,
        }
    }
}

impl Tabular for OverviewRow {
    const HEADERS: &'static [&'static str] =
        &["Map Name", "Server", "X Coord", "Y Coord", "Landmark"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.map_name.clone(),
            self.server.to_string(),
            self.x.to_string(),
            self.y.to_string(),
            flag(self.landmark),
        ]
    }
}

/// Handle `yagamap render`.
pub async fn handle(
    args: &RenderArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let sheet_id = sheet_id_from_url(&args.sheet)?;
    let zone = ZoneName::canonicalize(&args.server).context("--server must not be blank")?;
    let criteria = FilterCriteria::new(
        zone.clone(),
        args.completed_visible(ctx.config.map.include_completed),
    );

    let (load, markers) = tokio::join!(ctx.load_registry(), ctx.fetch_markers(&sheet_id));
    let load = load?;
    let markers = markers?;

    load.registry.require(&zone)?;
    let background = if args.html {
        Some(artifact::find_background(&ctx.config.map.assets_dir, &zone)?)
    } else {
        None
    };

    let result = MapPipeline::new(ctx.link_parser()).run(&markers, &load.registry, &criteria)?;
    if !result.omissions.is_empty() {
        tracing::info!(
            zone = %zone,
            omitted = result.omissions.len(),
            malformed = result.malformed().count(),
            "rows left off the map"
        );
    }

    let map_path = background
        .map(|background| {
            artifact::write_map(&ctx.config.map.output_dir, &zone, &result.scene, &background)
        })
        .transpose()?;

    let response = RenderResponse {
        rows: result.retained.iter().map(OverviewRow::from).collect(),
        zone: result.zone,
        dimensions: result.dimensions,
        scene: result.scene,
        omissions: result.omissions,
        skipped_dimension_rows: load.skipped,
        map_path: map_path.map(|path| path.display().to_string()),
    };

    output(&response, &response.rows, flags.format)?;
    if let Some(path) = &response.map_path
        && !flags.quiet
    {
        eprintln!("map written to {path}");
    }
    Ok(())
}
