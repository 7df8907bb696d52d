use anyhow::{Context, Result};
use std::path::PathBuf;

use super::{get_config_path, Config};
use crate::output::OutputFormat;
use crate::scoring::ScoringConfig;

/// Write a config file holding the default scoring weights.
///
/// Uses `path` when given, otherwise the default config location. Refuses to
/// replace an existing file unless `force` is set. Returns the path written.
pub fn write_default_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = Config {
        scoring: Some(ScoringConfig::default()),
        format: Some(OutputFormat::Json),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    Ok(config_path)
}
