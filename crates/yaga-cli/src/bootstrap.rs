use std::path::{Path, PathBuf};

use anyhow::Context;
use yaga_config::YagaConfig;

/// Load `.env` (if any) into the process environment, then layered config.
pub fn load_config() -> anyhow::Result<YagaConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    if let Some(env_path) = find_dotenv(&cwd) {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }

    YagaConfig::load().context("failed to load yagamap configuration")
}

/// Nearest `.env`, checking `start` and then each ancestor.
fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}
