//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window title, size and presentation.
///
/// The window is not resizable; `width` and `height` are also the initial
/// viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Inner width in physical pixels (valid range: 1-16384).
    pub width: u32,
    /// Inner height in physical pixels (valid range: 1-16384).
    pub height: u32,
    /// Sync buffer swaps to the display refresh.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Textured rectangle".into(),
            width: 1133,
            height: 755,
            vsync: true,
        }
    }
}
