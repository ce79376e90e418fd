//! Full configuration validation.
//!
//! Each section has its own check; `validate` runs them all and collects
//! errors into a single `ConfigError`.

mod helpers;
mod sections;


use texcube_common::ConfigError;

use crate::schema::TexcubeConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TexcubeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_window(&mut errors, config);
    sections::validate_assets(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
