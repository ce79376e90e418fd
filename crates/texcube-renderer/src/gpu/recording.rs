//! In-memory `GlApi` used by unit tests.
//!
//! Records every call, hands out non-zero handles, tracks which objects are
//! still alive, and can be told to fail compilation, linking or texture
//! allocation.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use super::device::{DebugMessage, GlApi};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    Viewport(i32, i32, i32, i32),
    Enable(u32),
    ClearColor([f32; 4]),
    Clear(u32),
    DebugMessageCallback,
    CreateShader { shader_type: u32, id: u32 },
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    Uniform1i { name: String, value: i32 },
    Uniform1f { name: String, value: f32 },
    UniformMatrix4 { name: String, value: Vec<f32> },
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, len: usize, usage: u32 },
    DeleteBuffer(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    CreateTexture(u32),
    ActiveTexture(u32),
    BindTexture { target: u32, texture: Option<u32> },
    TexParameter {
        target: u32,
        parameter: u32,
        value: i32,
    },
    PixelStore { parameter: u32, value: i32 },
    TexImage2d {
        internal_format: i32,
        width: i32,
        height: i32,
        format: u32,
        len: usize,
    },
    GenerateMipmap(u32),
    DeleteTexture(u32),
    DrawArrays { mode: u32, first: i32, count: i32 },
    DrawElements {
        mode: u32,
        count: i32,
        element_type: u32,
        offset: i32,
    },
}

impl GlCall {
    /// Whether this call allocates a GPU object.
    pub(crate) fn is_allocation(&self) -> bool {
        matches!(
            self,
            GlCall::CreateShader { .. }
                | GlCall::CreateProgram(_)
                | GlCall::CreateVertexArray(_)
                | GlCall::CreateBuffer(_)
                | GlCall::CreateTexture(_)
                | GlCall::BufferData { .. }
                | GlCall::TexImage2d { .. }
        )
    }
}

/// Uniform location that remembers the name it was resolved from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedLocation(pub String);

/// Clones share one call log and object table, so a test can keep a
/// probe after moving the device into the code under test.
#[derive(Clone)]
pub(crate) struct RecordingGl {
    pub debug_supported: bool,
    pub link_fails: bool,
    pub texture_alloc_fails: bool,
    pub empty_info_logs: bool,
    pub missing_uniforms: Vec<&'static str>,
    log: Rc<Log>,
}

#[derive(Default)]
struct Log {
    calls: RefCell<Vec<GlCall>>,
    next_id: Cell<u32>,
    live: RefCell<BTreeSet<u32>>,
    sources: RefCell<HashMap<u32, String>>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        let log = Log::default();
        log.next_id.set(1);
        Self {
            debug_supported: true,
            link_fails: false,
            texture_alloc_fails: false,
            empty_info_logs: false,
            missing_uniforms: Vec::new(),
            log: Rc::new(log),
        }
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.log.calls.borrow().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.log.calls.borrow().len()
    }

    /// Calls recorded after the first `from` entries.
    pub(crate) fn calls_since(&self, from: usize) -> Vec<GlCall> {
        self.log.calls.borrow()[from..].to_vec()
    }

    pub(crate) fn is_live(&self, id: u32) -> bool {
        self.log.live.borrow().contains(&id)
    }

    pub(crate) fn live_count(&self) -> usize {
        self.log.live.borrow().len()
    }

    fn record(&self, call: GlCall) {
        self.log.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> u32 {
        let id = self.log.next_id.get();
        self.log.next_id.set(id + 1);
        self.log.live.borrow_mut().insert(id);
        id
    }

    fn release(&self, id: u32) {
        self.log.live.borrow_mut().remove(&id);
    }

    fn location_name(location: Option<&RecordedLocation>) -> String {
        location.map(|l| l.0.clone()).unwrap_or_default()
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;
    type Texture = u32;
    type UniformLocation = RecordedLocation;

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(GlCall::Viewport(x, y, width, height));
    }

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(GlCall::ClearColor([red, green, blue, alpha]));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn supports_debug(&self) -> bool {
        self.debug_supported
    }

    fn debug_message_callback<F>(&mut self, callback: F)
    where
        F: Fn(DebugMessage<'_>) + Send + Sync + 'static,
    {
        self.record(GlCall::DebugMessageCallback);
        callback(DebugMessage {
            source: glow::DEBUG_SOURCE_APPLICATION,
            gl_type: glow::DEBUG_TYPE_MARKER,
            id: 0,
            severity: glow::DEBUG_SEVERITY_NOTIFICATION,
            message: "debug output enabled",
        });
    }

    fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateShader { shader_type, id });
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.log
            .sources
            .borrow_mut()
            .insert(shader, source.to_string());
        self.record(GlCall::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(GlCall::CompileShader(shader));
    }

    fn get_shader_compile_status(&self, shader: u32) -> bool {
        self.log
            .sources
            .borrow()
            .get(&shader)
            .is_some_and(|src| src.contains("void main"))
    }

    fn get_shader_info_log(&self, shader: u32) -> String {
        if self.empty_info_logs || self.get_shader_compile_status(shader) {
            return String::new();
        }
        "0:1(1): error: no function with name 'main'".repeat(20)
    }

    fn delete_shader(&self, shader: u32) {
        self.release(shader);
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(GlCall::DetachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        self.record(GlCall::LinkProgram(program));
    }

    fn get_program_link_status(&self, _program: u32) -> bool {
        !self.link_fails
    }

    fn get_program_info_log(&self, _program: u32) -> String {
        if self.empty_info_logs || !self.link_fails {
            return String::new();
        }
        "error: fragment shader input `TexCoord' has no matching output".to_string()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.release(program);
        self.record(GlCall::DeleteProgram(program));
    }

    fn get_uniform_location(&self, _program: u32, name: &str) -> Option<RecordedLocation> {
        if self.missing_uniforms.contains(&name) {
            return None;
        }
        Some(RecordedLocation(name.to_string()))
    }

    fn uniform_1_i32(&self, location: Option<&RecordedLocation>, x: i32) {
        self.record(GlCall::Uniform1i {
            name: Self::location_name(location),
            value: x,
        });
    }

    fn uniform_1_f32(&self, location: Option<&RecordedLocation>, x: f32) {
        self.record(GlCall::Uniform1f {
            name: Self::location_name(location),
            value: x,
        });
    }

    fn uniform_matrix_4_f32_slice(
        &self,
        location: Option<&RecordedLocation>,
        _transpose: bool,
        v: &[f32],
    ) {
        self.record(GlCall::UniformMatrix4 {
            name: Self::location_name(location),
            value: v.to_vec(),
        });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(GlCall::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.release(vertex_array);
        self.record(GlCall::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.allocate();
        self.record(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(GlCall::BufferData {
            target,
            len: data.len(),
            usage,
        });
    }

    fn delete_buffer(&self, buffer: u32) {
        self.release(buffer);
        self.record(GlCall::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn create_texture(&self) -> Result<u32, String> {
        if self.texture_alloc_fails {
            return Err("glGenTextures returned no name".to_string());
        }
        let id = self.allocate();
        self.record(GlCall::CreateTexture(id));
        Ok(id)
    }

    fn active_texture(&self, unit: u32) {
        self.record(GlCall::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: Option<u32>) {
        self.record(GlCall::BindTexture { target, texture });
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        self.record(GlCall::TexParameter {
            target,
            parameter,
            value,
        });
    }

    fn pixel_store_i32(&self, parameter: u32, value: i32) {
        self.record(GlCall::PixelStore { parameter, value });
    }

    fn tex_image_2d(
        &self,
        _target: u32,
        _level: i32,
        internal_format: i32,
        width: i32,
        height: i32,
        _border: i32,
        format: u32,
        _ty: u32,
        pixels: Option<&[u8]>,
    ) {
        self.record(GlCall::TexImage2d {
            internal_format,
            width,
            height,
            format,
            len: pixels.map_or(0, <[u8]>::len),
        });
    }

    fn generate_mipmap(&self, target: u32) {
        self.record(GlCall::GenerateMipmap(target));
    }

    fn delete_texture(&self, texture: u32) {
        self.release(texture);
        self.record(GlCall::DeleteTexture(texture));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(GlCall::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}
