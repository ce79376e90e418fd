//! OpenGL renderer for a textured, spinning cube.
//!
//! All GPU objects are owned by RAII wrappers that share one [`GlApi`]
//! device. [`RenderState`] builds the full scene in one call and draws a
//! frame for any elapsed time.

pub mod clock;
pub mod geometry;
pub mod gpu;
pub mod image_asset;
pub mod render_state;
pub mod shader;
pub mod texture;
pub mod transform;

pub use clock::FrameClock;
pub use geometry::{DrawMode, GeometryBuffer, MeshData, VertexLayout};
pub use gpu::{GlApi, GlowDevice, RendererError, Viewport};
pub use image_asset::{ImageAsset, PixelFormat};
pub use render_state::RenderState;
pub use shader::{ShaderProgram, ShaderStage, ShaderUnit, UniformValue};
pub use texture::GpuTexture;
pub use transform::FrameTransforms;
