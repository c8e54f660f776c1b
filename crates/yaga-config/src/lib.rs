//! # yaga-config
//!
//! Layered configuration loading for yagamap using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`YAGAMAP_*` prefix, `__` as separator)
//! 2. Project-level `.yagamap/config.toml`
//! 3. User-level `~/.config/yagamap/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `YAGAMAP_SHEETS__TIMEOUT_SECS` -> `sheets.timeout_secs`,
//! `YAGAMAP_MAP__LINK_HOST` -> `map.link_host`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use yaga_config::YagaConfig;
//!
//! let config = YagaConfig::load().expect("config");
//! println!("markers tab: {}", config.sheets.markers_tab);
//! ```

mod error;
mod map;
mod sheets;

pub use error::ConfigError;
pub use map::MapConfig;
pub use sheets::{DEFAULT_DIMENSIONS_SHEET_ID, SheetsConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct YagaConfig {
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub map: MapConfig,
}

impl YagaConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// `.env` files are not read here; the binary loads them into the
    /// process environment first.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".yagamap/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("YAGAMAP_").split("__"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sheets.validate()?;
        self.map.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("yagamap").join("config.toml"))
    }
}
