use std::rc::Rc;

use glam::Mat4;

use super::{bounded_log, ShaderStage, ShaderUnit};
use crate::gpu::{GlApi, RendererError};

/// A value that can be written to a shader uniform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    Bool(bool),
    Int(i32),
    Float(f32),
    Mat4(Mat4),
}

/// A linked vertex + fragment program.
pub struct ShaderProgram<G: GlApi> {
    gl: Rc<G>,
    handle: G::Program,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Link a vertex and a fragment unit into a program.
    ///
    /// Both units are consumed. They are detached and deleted whether or
    /// not linking succeeds, so no shader object outlives this call.
    pub fn link(vertex: ShaderUnit<G>, fragment: ShaderUnit<G>) -> Result<Self, RendererError> {
        if vertex.stage() != ShaderStage::Vertex || fragment.stage() != ShaderStage::Fragment {
            return Err(RendererError::ShaderLink {
                log: format!(
                    "expected VERTEX and FRAGMENT units, got {} and {}",
                    vertex.stage(),
                    fragment.stage()
                ),
            });
        }

        let gl = Rc::clone(vertex.device());
        let handle = gl.create_program().map_err(RendererError::GpuResource)?;
        let program = Self { gl, handle };

        let gl = &program.gl;
        gl.attach_shader(handle, vertex.handle());
        gl.attach_shader(handle, fragment.handle());
        gl.link_program(handle);
        let linked = gl.get_program_link_status(handle);
        gl.detach_shader(handle, vertex.handle());
        gl.detach_shader(handle, fragment.handle());

        if !linked {
            let log = bounded_log(gl.get_program_info_log(handle));
            tracing::debug!(program = ?handle, "shader program link failed");
            return Err(RendererError::ShaderLink { log });
        }

        drop(vertex);
        drop(fragment);

        tracing::debug!(program = ?handle, "shader program linked");
        Ok(program)
    }

    /// Make this the active program. Uniform writes only reach the active
    /// program, so callers activate before calling `set_uniform`.
    pub fn activate(&self) {
        self.gl.use_program(Some(self.handle));
    }

    /// Write `value` to the uniform called `name`.
    ///
    /// Names the driver does not report as active (unknown, or optimized
    /// out) are ignored, as GL itself does for location -1.
    pub fn set_uniform(&self, name: &str, value: UniformValue) {
        let Some(location) = self.gl.get_uniform_location(self.handle, name) else {
            tracing::trace!(name, "uniform not active; write skipped");
            return;
        };
        let location = Some(&location);

        match value {
            UniformValue::Bool(v) => self.gl.uniform_1_i32(location, i32::from(v)),
            UniformValue::Int(v) => self.gl.uniform_1_i32(location, v),
            UniformValue::Float(v) => self.gl.uniform_1_f32(location, v),
            UniformValue::Mat4(m) => {
                self.gl
                    .uniform_matrix_4_f32_slice(location, false, &m.to_cols_array())
            }
        }
    }

    pub fn handle(&self) -> G::Program {
        self.handle
    }
}

impl<G: GlApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        self.gl.delete_program(self.handle);
    }
}
