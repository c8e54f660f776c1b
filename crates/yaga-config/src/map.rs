//! Map rendering configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_link_host() -> String {
    String::from("yaga.host")
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("maps")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("maps/out")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Host suffix marker links are served from (`https://<zone>.<host>/#x,y`).
    #[serde(default = "default_link_host")]
    pub link_host: String,

    /// Directory holding `<zone>*.png` background images.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,

    /// Directory rendered HTML maps are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Show completed markers unless overridden on the command line.
    #[serde(default)]
    pub include_completed: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            link_host: default_link_host(),
            assets_dir: default_assets_dir(),
            output_dir: default_output_dir(),
            include_completed: false,
        }
    }
}

impl MapConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `link_host` is blank or
    /// contains a path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let host = self.link_host.trim();
        if host.is_empty() || host.contains('/') {
            return Err(ConfigError::InvalidValue {
                field: String::from("map.link_host"),
                reason: String::from("must be a bare host name such as 'yaga.host'"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = MapConfig::default();
        assert_eq!(config.link_host, "yaga.host");
        assert_eq!(config.assets_dir, PathBuf::from("maps"));
        assert_eq!(config.output_dir, PathBuf::from("maps/out"));
        assert!(!config.include_completed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn host_with_path_is_invalid() {
        let config = MapConfig {
            link_host: "yaga.host/maps".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
