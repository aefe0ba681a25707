//! TOML config file loading.

use crate::schema::HuestepConfig;
use crate::validation;
use huestep_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub(crate) const APP_NAME: &str = "huestep";

/// Load config from a specific TOML file path.
///
/// Missing fields fall back to serde defaults. Unlike a missing default
/// file, a missing explicit path is an error, and so is a config that
/// fails validation.
pub fn load_from_path(path: &Path) -> Result<HuestepConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: HuestepConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/huestep/config.toml`
/// On Linux: `~/.config/huestep/config.toml`
///
/// If the file does not exist, defaults are returned and nothing is written.
pub fn load_default() -> Result<HuestepConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        debug!("no config found at {}, using defaults", path.display());
        return Ok(HuestepConfig::default());
    }

    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_NAME).join("config.toml"))
}
