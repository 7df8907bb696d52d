mod init;
mod schema;

pub use init::write_default_config;
pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/pool-standings/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("pool-standings"))
}

/// Get the default config file path (~/.config/pool-standings/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path,
///   and falls back to built-in defaults when no file exists there.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            if !config_path.exists() {
                anyhow::bail!("Config file not found at {}", config_path.display());
            }
            read_config(&config_path)
        }
        None => {
            let config_path = get_config_path()?;
            if config_path.exists() {
                read_config(&config_path)
            } else {
                log::debug!(
                    "No config at {}, using built-in defaults",
                    config_path.display()
                );
                Ok(Config::default())
            }
        }
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    log::debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
scoring:
  goal: 1
  assist: 1
  win: 3
  shutout: 2
format: table
"#,
        );
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.win, Some(3));
        assert_eq!(scoring.shutout, Some(2));
        assert_eq!(config.format, Some(OutputFormat::Table));
    }

    #[test]
    fn test_load_empty_mapping() {
        let file = write_config("{}");
        let config = load_config(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_errors() {
        let file = write_config("scoring: [not, a, mapping]");
        let err = load_config(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_unknown_key_errors() {
        let file = write_config("queries: []");
        assert!(load_config(Some(file.path().to_path_buf())).is_err());
    }
}
