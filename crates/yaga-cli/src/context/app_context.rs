use std::time::Duration;

use anyhow::Context;
use yaga_config::YagaConfig;
use yaga_core::{LinkParser, RawTable};
use yaga_map::registry::{SERVER, X_DIM, Y_DIM};
use yaga_map::{RegistryLoad, ZoneRegistry};
use yaga_sheets::SheetsClient;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: YagaConfig,
    pub sheets: SheetsClient,
}

impl AppContext {
    /// Build the sheets client from configuration.
    pub fn init(config: YagaConfig) -> anyhow::Result<Self> {
        let sheets = SheetsClient::new(
            &config.sheets.base_url,
            Duration::from_secs(config.sheets.timeout_secs),
        )
        .context("failed to build spreadsheet HTTP client")?;
        Ok(Self { config, sheets })
    }

    /// Link parser for the configured host suffix.
    #[must_use]
    pub fn link_parser(&self) -> LinkParser {
        LinkParser::new(&self.config.map.link_host)
    }

    /// Fetch the dimension sheet and build a fresh registry from it.
    pub async fn load_registry(&self) -> anyhow::Result<RegistryLoad> {
        let sheets = &self.config.sheets;
        let table = self
            .sheets
            .fetch_table(&sheets.dimensions_sheet_id, &sheets.dimensions_tab)
            .await
            .context("failed to fetch zone dimension sheet")?;
        warn_missing_dimension_columns(&table);

        let load = ZoneRegistry::from_table(&table);
        tracing::debug!(
            zones = load.registry.len(),
            skipped = load.skipped.len(),
            "zone registry loaded"
        );
        Ok(load)
    }

    /// Fetch an operator's marker tab.
    pub async fn fetch_markers(&self, sheet_id: &str) -> anyhow::Result<RawTable> {
        self.sheets
            .fetch_table(sheet_id, &self.config.sheets.markers_tab)
            .await
            .with_context(|| format!("failed to fetch marker sheet {sheet_id}"))
    }
}

fn warn_missing_dimension_columns(table: &RawTable) {
    let missing = table.missing_columns(&[SERVER, X_DIM, Y_DIM]);
    if !missing.is_empty() {
        tracing::warn!(
            ?missing,
            "dimension sheet lacks columns; every row will be skipped"
        );
    }
}
