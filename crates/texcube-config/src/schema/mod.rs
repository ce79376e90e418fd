//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assets;
mod logging;
mod window;

pub use assets::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TexcubeConfig {
    pub window: WindowConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}
