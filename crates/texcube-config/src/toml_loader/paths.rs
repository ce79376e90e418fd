//! Config path resolution.

use std::path::PathBuf;

use texcube_common::ConfigError;

/// Get the platform-specific default config file path.
///
/// On Linux: `~/.config/texcube/config.toml`
/// On macOS: `~/Library/Application Support/texcube/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("texcube").join("config.toml"))
}
