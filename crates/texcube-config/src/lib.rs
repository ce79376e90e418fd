//! Texcube configuration.
//!
//! TOML-based settings for the window, asset locations and logging. Every
//! section has defaults, so a partial file (or no file at all) works.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{AssetsConfig, LoggingConfig, TexcubeConfig, WindowConfig};

use std::path::Path;

use texcube_common::ConfigError;

/// Load and validate config from `path`, or from the platform default
/// location when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<TexcubeConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
