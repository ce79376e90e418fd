//! The narrow slice of OpenGL the renderer depends on.
//!
//! Method names and argument order follow `glow::HasContext` so the
//! production implementation is a thin delegation, while tests can swap in
//! a recording device that needs no GPU.

use std::fmt::Debug;

/// Severity/type payload of one driver debug message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugMessage<'a> {
    pub source: u32,
    pub gl_type: u32,
    pub id: u32,
    pub severity: u32,
    pub message: &'a str,
}

/// OpenGL entry points used by the core.
///
/// Implementations assume a current context on the calling thread. Handle
/// types are plain copyable identifiers; ownership of the underlying GPU
/// objects is tracked by the resource types that create them.
pub trait GlApi {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type VertexArray: Copy + Debug + PartialEq;
    type Texture: Copy + Debug + PartialEq;
    type UniformLocation: Debug;

    // --- global state ---

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    fn enable(&self, capability: u32);
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);
    fn clear(&self, mask: u32);

    /// Whether the context can deliver debug messages.
    fn supports_debug(&self) -> bool;

    /// Install `callback` as the driver debug-message hook.
    ///
    /// Takes `&mut self` because the hook is registered once, before the
    /// device is shared with the resources built on top of it.
    fn debug_message_callback<F>(&mut self, callback: F)
    where
        F: Fn(DebugMessage<'_>) + Send + Sync + 'static;

    // --- shaders and programs ---

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn get_shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn get_shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn get_program_link_status(&self, program: Self::Program) -> bool;
    fn get_program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn get_uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation>;
    fn uniform_1_i32(&self, location: Option<&Self::UniformLocation>, x: i32);
    fn uniform_1_f32(&self, location: Option<&Self::UniformLocation>, x: f32);
    fn uniform_matrix_4_f32_slice(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        v: &[f32],
    );

    // --- buffers and vertex arrays ---

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);
    fn delete_buffer(&self, buffer: Self::Buffer);

    #[allow(clippy::too_many_arguments)]
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);

    // --- textures ---

    fn create_texture(&self) -> Result<Self::Texture, String>;
    fn active_texture(&self, unit: u32);
    fn bind_texture(&self, target: u32, texture: Option<Self::Texture>);
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    fn pixel_store_i32(&self, parameter: u32, value: i32);
    #[allow(clippy::too_many_arguments)]
    fn tex_image_2d(
        &self,
        target: u32,
        level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        border: i32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    );
    fn generate_mipmap(&self, target: u32);
    fn delete_texture(&self, texture: Self::Texture);

    // --- drawing ---

    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
}
