//! Per-section validators.

use super::helpers::validate_range;
use crate::schema::{TexcubeConfig, LOG_LEVELS};

/// Largest window edge accepted, in pixels.
const MAX_WINDOW_EDGE: u32 = 16384;

pub(super) fn validate_window(errors: &mut Vec<String>, config: &TexcubeConfig) {
    let window = &config.window;
    validate_range(errors, "window.width", window.width, 1, MAX_WINDOW_EDGE);
    validate_range(errors, "window.height", window.height, 1, MAX_WINDOW_EDGE);
}

pub(super) fn validate_assets(errors: &mut Vec<String>, config: &TexcubeConfig) {
    for (name, path) in config.assets.entries() {
        if path.as_os_str().is_empty() {
            errors.push(format!("{name} must not be empty"));
        }
    }
}

pub(super) fn validate_logging(errors: &mut Vec<String>, config: &TexcubeConfig) {
    let level = config.logging.level.as_str();
    if !LOG_LEVELS.contains(&level) {
        errors.push(format!(
            "logging.level = '{level}' is not one of: {}",
            LOG_LEVELS.join(", ")
        ));
    }
}
