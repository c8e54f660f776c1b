use serde::Serialize;
use yaga_core::{SkippedDimensionRow, ZoneName};
use yaga_map::ZoneRegistry;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, output};

#[derive(Debug, Serialize)]
struct ServersResponse {
    zones: Vec<ZoneEntry>,
    skipped: Vec<SkippedDimensionRow>,
}

#[derive(Debug, PartialEq, Serialize)]
struct ZoneEntry {
    server: ZoneName,
    width: f64,
    height: f64,
}

impl Tabular for ZoneEntry {
    const HEADERS: &'static [&'static str] = &["Server", "X Dim", "Y Dim"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.server.to_string(),
            self.width.to_string(),
            self.height.to_string(),
        ]
    }
}

fn entries(registry: &ZoneRegistry) -> Vec<ZoneEntry> {
    registry
        .zones()
        .map(|(zone, dims)| ZoneEntry {
            server: zone.clone(),
            width: dims.width,
            height: dims.height,
        })
        .collect()
}

/// Handle `yagamap servers`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let load = ctx.load_registry().await?;
    let response = ServersResponse {
        zones: entries(&load.registry),
        skipped: load.skipped,
    };
    output(&response, &response.zones, flags.format)
}
