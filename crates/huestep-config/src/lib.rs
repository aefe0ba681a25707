//! huestep configuration.
//!
//! An optional TOML file carries presentation and logging settings for the
//! `color-steps` and `rename-calendar` binaries. Every section has defaults,
//! so a partial file (or no file at all) works.

pub mod logging;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HuestepConfig, LogLevel, LoggingConfig, OutputConfig, RenameConfig};
pub use toml_loader::{default_config_path, load_default, load_from_path};

use huestep_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, otherwise from the platform default.
pub fn load_config(path: Option<&Path>) -> Result<HuestepConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn explicit_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"error\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, LogLevel::Error);
    }
}
