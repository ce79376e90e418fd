use std::rc::Rc;

use texcube_config::schema::AssetsConfig;

use crate::geometry::{GeometryBuffer, MeshData, VertexLayout};
use crate::gpu::{install_debug_hook, GlApi, GlowDevice, RendererError, Viewport};
use crate::image_asset::ImageAsset;
use crate::shader::{ShaderProgram, ShaderStage, ShaderUnit, UniformValue};
use crate::texture::GpuTexture;
use crate::transform::FrameTransforms;

/// Background colour (RGBA).
pub const CLEAR_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 0.5];

/// Sampler uniforms, indexed by texture unit.
pub const SAMPLER_UNIFORMS: [&str; 2] = ["texture1", "texture2"];

pub const MODEL_UNIFORM: &str = "model";
pub const VIEW_UNIFORM: &str = "view";
pub const PROJECTION_UNIFORM: &str = "projection";

/// Everything needed to draw the textured cube.
///
/// Owns the device for its whole lifetime. Resources share it through
/// `Rc`, which also keeps the whole state on the thread that owns the
/// context. Field order is drop order: GPU objects go before the device.
pub struct RenderState<G: GlApi = GlowDevice> {
    program: ShaderProgram<G>,
    geometry: GeometryBuffer<G>,
    textures: [GpuTexture<G>; 2],
    viewport: Viewport,
    gl: Rc<G>,
}

impl<G: GlApi> RenderState<G> {
    /// Configure global GL state and build every resource.
    pub fn new(
        mut gl: G,
        viewport: Viewport,
        assets: &AssetsConfig,
    ) -> Result<Self, RendererError> {
        let (width, height) = gl_viewport_size(viewport)?;
        gl.viewport(0, 0, width, height);
        install_debug_hook(&mut gl);
        gl.enable(glow::DEPTH_TEST);

        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear(glow::COLOR_BUFFER_BIT);

        let gl = Rc::new(gl);

        let vertex =
            ShaderUnit::compile(Rc::clone(&gl), &assets.vertex_shader, ShaderStage::Vertex)?;
        let fragment = ShaderUnit::compile(
            Rc::clone(&gl),
            &assets.fragment_shader,
            ShaderStage::Fragment,
        )?;
        let program = ShaderProgram::link(vertex, fragment)?;

        let geometry = GeometryBuffer::new(
            Rc::clone(&gl),
            MeshData::CUBE,
            VertexLayout::POSITION_TEXCOORD,
        )?;

        let primary =
            GpuTexture::create(Rc::clone(&gl), ImageAsset::load(&assets.primary_texture)?)?;
        let secondary =
            GpuTexture::create(Rc::clone(&gl), ImageAsset::load(&assets.secondary_texture)?)?;

        tracing::info!(
            width = viewport.width,
            height = viewport.height,
            "render state ready"
        );

        Ok(Self {
            program,
            geometry,
            textures: [primary, secondary],
            viewport,
            gl,
        })
    }

    /// Clear colour and depth for a new frame.
    pub fn begin_frame(&self) {
        self.gl
            .clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }

    /// Draw the cube as it looks `elapsed_secs` seconds after start.
    ///
    /// Binds existing objects and writes uniforms only; no GPU object is
    /// created here.
    pub fn draw(&self, elapsed_secs: f32) {
        self.program.activate();

        for (unit, texture) in self.textures.iter().enumerate() {
            self.gl.active_texture(glow::TEXTURE0 + unit as u32);
            self.gl
                .bind_texture(glow::TEXTURE_2D, Some(texture.handle()));
        }
        for (unit, name) in SAMPLER_UNIFORMS.iter().enumerate() {
            self.program
                .set_uniform(name, UniformValue::Int(unit as i32));
        }

        let transforms = FrameTransforms::at(elapsed_secs, self.viewport);
        self.program
            .set_uniform(MODEL_UNIFORM, UniformValue::Mat4(transforms.model));
        self.program.set_uniform(
            PROJECTION_UNIFORM,
            UniformValue::Mat4(transforms.projection),
        );
        self.program
            .set_uniform(VIEW_UNIFORM, UniformValue::Mat4(transforms.view));

        self.geometry.draw();
    }

    pub fn program(&self) -> &ShaderProgram<G> {
        &self.program
    }

    pub fn geometry(&self) -> &GeometryBuffer<G> {
        &self.geometry
    }

    pub fn textures(&self) -> &[GpuTexture<G>; 2] {
        &self.textures
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

fn gl_viewport_size(viewport: Viewport) -> Result<(i32, i32), RendererError> {
    let width = i32::try_from(viewport.width);
    let height = i32::try_from(viewport.height);
    match (width, height) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(RendererError::GpuResource(format!(
            "invalid viewport {}x{}",
            viewport.width, viewport.height
        ))),
    }
}
