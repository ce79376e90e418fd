//! Vertex-array, vertex-buffer and optional index-buffer objects for one
//! immutable mesh.

use std::rc::Rc;

use super::layout::VertexLayout;
use super::mesh::MeshData;
use crate::gpu::{GlApi, RendererError};

/// How the mesh is submitted. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// `glDrawArrays` over `count` vertices.
    Arrays { count: i32 },
    /// `glDrawElements` over `count` indices of `index_type`.
    Indexed { count: i32, index_type: u32 },
}

/// GPU copy of one mesh plus its attribute bindings.
pub struct GeometryBuffer<G: GlApi> {
    gl: Rc<G>,
    vertex_array: G::VertexArray,
    vertex_buffer: G::Buffer,
    index_buffer: Option<G::Buffer>,
    layout: VertexLayout,
    draw_mode: DrawMode,
}

impl<G: GlApi> GeometryBuffer<G> {
    /// Upload `mesh` once with static-draw usage and record `layout` in a
    /// new vertex array. An index buffer is created only when the mesh
    /// carries indices; otherwise the mesh is drawn non-indexed.
    pub fn new(gl: Rc<G>, mesh: MeshData<'_>, layout: VertexLayout) -> Result<Self, RendererError> {
        validate(&mesh, &layout)?;
        let vertex_count = mesh.vertices.len() / layout.stride_floats;

        let vertex_array = gl
            .create_vertex_array()
            .map_err(RendererError::GpuResource)?;
        let vertex_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(e) => {
                gl.delete_vertex_array(vertex_array);
                return Err(RendererError::GpuResource(e));
            }
        };
        let index_buffer = if mesh.indices.is_empty() {
            None
        } else {
            match gl.create_buffer() {
                Ok(buffer) => Some(buffer),
                Err(e) => {
                    gl.delete_buffer(vertex_buffer);
                    gl.delete_vertex_array(vertex_array);
                    return Err(RendererError::GpuResource(e));
                }
            }
        };

        let draw_mode = match index_buffer {
            None => DrawMode::Arrays {
                count: gl_count(vertex_count)?,
            },
            Some(_) => DrawMode::Indexed {
                count: gl_count(mesh.indices.len())?,
                index_type: glow::UNSIGNED_INT,
            },
        };

        let geometry = Self {
            gl,
            vertex_array,
            vertex_buffer,
            index_buffer,
            layout,
            draw_mode,
        };
        geometry.upload(&mesh);

        tracing::debug!(
            vertices = vertex_count,
            indices = mesh.indices.len(),
            ?draw_mode,
            "geometry uploaded"
        );
        Ok(geometry)
    }

    fn upload(&self, mesh: &MeshData<'_>) {
        let gl = &self.gl;
        gl.bind_vertex_array(Some(self.vertex_array));

        gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vertex_buffer));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(mesh.vertices),
            glow::STATIC_DRAW,
        );

        if let Some(index_buffer) = self.index_buffer {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
            gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(mesh.indices),
                glow::STATIC_DRAW,
            );
        }

        let stride = self.layout.stride_bytes();
        for attr in self.layout.attributes {
            gl.vertex_attrib_pointer_f32(
                attr.location,
                attr.components,
                glow::FLOAT,
                false,
                stride,
                attr.byte_offset(),
            );
            gl.enable_vertex_attrib_array(attr.location);
        }

        // The element binding is part of the VAO state; unbind the VAO first.
        gl.bind_vertex_array(None);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
    }

    /// Bind the vertex array and submit the mesh.
    pub fn draw(&self) {
        self.gl.bind_vertex_array(Some(self.vertex_array));
        match self.draw_mode {
            DrawMode::Arrays { count } => self.gl.draw_arrays(glow::TRIANGLES, 0, count),
            DrawMode::Indexed { count, index_type } => {
                self.gl.draw_elements(glow::TRIANGLES, count, index_type, 0)
            }
        }
    }

    pub fn vertex_array(&self) -> G::VertexArray {
        self.vertex_array
    }

    pub fn index_buffer(&self) -> Option<G::Buffer> {
        self.index_buffer
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

}

impl<G: GlApi> Drop for GeometryBuffer<G> {
    fn drop(&mut self) {
        if let Some(index_buffer) = self.index_buffer {
            self.gl.delete_buffer(index_buffer);
        }
        self.gl.delete_buffer(self.vertex_buffer);
        self.gl.delete_vertex_array(self.vertex_array);
    }
}

fn validate(mesh: &MeshData<'_>, layout: &VertexLayout) -> Result<(), RendererError> {
    if !layout.is_packed() {
        return Err(RendererError::GpuResource(format!(
            "vertex layout does not tile a {}-float stride",
            layout.stride_floats
        )));
    }
    if mesh.vertices.is_empty() || mesh.vertices.len() % layout.stride_floats != 0 {
        return Err(RendererError::GpuResource(format!(
            "vertex data length {} is not a non-zero multiple of stride {}",
            mesh.vertices.len(),
            layout.stride_floats
        )));
    }
    Ok(())
}

fn gl_count(n: usize) -> Result<i32, RendererError> {
    i32::try_from(n)
        .map_err(|_| RendererError::GpuResource(format!("element count {n} exceeds GLsizei")))
}
