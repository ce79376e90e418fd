use std::path::Path;
use std::rc::Rc;

use super::{bounded_log, ShaderStage};
use crate::gpu::{GlApi, RendererError};

/// One successfully compiled shader stage.
///
/// Construction either yields a compiled object or fails; a unit that
/// failed to compile never escapes, and its GL object is deleted on the
/// way out.
pub struct ShaderUnit<G: GlApi> {
    gl: Rc<G>,
    handle: G::Shader,
    stage: ShaderStage,
}

impl<G: GlApi> ShaderUnit<G> {
    /// Read GLSL source from `path` and compile it for `stage`.
    pub fn compile(
        gl: Rc<G>,
        path: impl AsRef<Path>,
        stage: ShaderStage,
    ) -> Result<Self, RendererError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| RendererError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), %stage, bytes = source.len(), "read shader source");
        Self::from_source(gl, &source, stage)
    }

    /// Compile GLSL `source` for `stage`.
    pub fn from_source(gl: Rc<G>, source: &str, stage: ShaderStage) -> Result<Self, RendererError> {
        let handle = gl
            .create_shader(stage.gl_type())
            .map_err(RendererError::GpuResource)?;
        let unit = Self { gl, handle, stage };

        unit.gl.shader_source(handle, source);
        unit.gl.compile_shader(handle);

        if !unit.gl.get_shader_compile_status(handle) {
            let log = bounded_log(unit.gl.get_shader_info_log(handle));
            tracing::debug!(%stage, "shader compilation failed");
            return Err(RendererError::ShaderCompile { stage, log });
        }

        tracing::debug!(%stage, shader = ?handle, "shader compiled");
        Ok(unit)
    }

    pub fn handle(&self) -> G::Shader {
        self.handle
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub(crate) fn device(&self) -> &Rc<G> {
        &self.gl
    }
}

impl<G: GlApi> Drop for ShaderUnit<G> {
    fn drop(&mut self) {
        self.gl.delete_shader(self.handle);
    }
}
