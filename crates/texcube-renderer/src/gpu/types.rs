use std::path::PathBuf;

use crate::shader::ShaderStage;

/// Errors raised while building GPU-side resources.
///
/// Every variant is a construction-time failure; once a `RenderState`
/// exists, nothing on the draw path returns one of these.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("cannot read shader source {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{stage} shader compilation failed: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("shader program linking failed: {log}")]
    ShaderLink { log: String },

    #[error("cannot decode image {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("GPU resource error: {0}")]
    GpuResource(String),
}

/// Framebuffer dimensions in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. A degenerate height yields 1.0.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}
