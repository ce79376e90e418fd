//! Core TOML config loading: read from path or platform default.

use std::io::ErrorKind;
use std::path::Path;

use texcube_common::ConfigError;
use tracing::{debug, info};

use super::paths::default_config_path;
use crate::schema::TexcubeConfig;

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. The result is not validated.
pub fn load_from_path(path: &Path) -> Result<TexcubeConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = parse_str(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Parse config from TOML text.
pub fn parse_str(content: &str) -> Result<TexcubeConfig, ConfigError> {
    toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from the platform-specific default path, or return the
/// defaults when no file exists there.
pub fn load_default() -> Result<TexcubeConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(TexcubeConfig::default())
        }
        Err(e) => Err(e),
    }
}
