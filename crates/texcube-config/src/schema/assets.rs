//! Asset location configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Paths to the shader sources and the two textures.
///
/// Relative paths are interpreted against a base directory chosen by the
/// caller; see [`AssetsConfig::resolved_against`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    /// Bound to texture unit 0.
    pub primary_texture: PathBuf,
    /// Bound to texture unit 1.
    pub secondary_texture: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            vertex_shader: "assets/shaders/shader.vert".into(),
            fragment_shader: "assets/shaders/shader.frag".into(),
            primary_texture: "assets/textures/crate.png".into(),
            secondary_texture: "assets/textures/emblem.png".into(),
        }
    }
}

impl AssetsConfig {
    /// Copy with every relative path joined onto `base`. Absolute paths
    /// are kept as-is.
    pub fn resolved_against(&self, base: &Path) -> Self {
        let resolve = |p: &Path| {
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                base.join(p)
            }
        };
        Self {
            vertex_shader: resolve(&self.vertex_shader),
            fragment_shader: resolve(&self.fragment_shader),
            primary_texture: resolve(&self.primary_texture),
            secondary_texture: resolve(&self.secondary_texture),
        }
    }

    /// `(key, path)` pairs, in config-file order.
    pub fn entries(&self) -> [(&'static str, &Path); 4] {
        [
            ("assets.vertex_shader", &self.vertex_shader),
            ("assets.fragment_shader", &self.fragment_shader),
            ("assets.primary_texture", &self.primary_texture),
            ("assets.secondary_texture", &self.secondary_texture),
        ]
    }
}
