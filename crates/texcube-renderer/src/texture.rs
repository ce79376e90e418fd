//! GPU textures uploaded from decoded images.

use std::rc::Rc;

use crate::gpu::{GlApi, RendererError};
use crate::image_asset::{ImageAsset, PixelFormat};

/// One immutable 2D texture with repeat wrapping, nearest filtering and a
/// full mipmap chain.
///
/// The destination format is always RGB. A 4-channel source is uploaded
/// with an RGBA source format into that RGB destination, so its alpha
/// channel is dropped on the GPU side; this matches how the scene's
/// textures are meant to be sampled.
pub struct GpuTexture<G: GlApi> {
    gl: Rc<G>,
    handle: G::Texture,
    width: u32,
    height: u32,
}

impl<G: GlApi> GpuTexture<G> {
    /// Upload `asset` into a new texture. The asset's pixel buffer is
    /// released when this returns, whether or not the upload succeeded.
    pub fn create(gl: Rc<G>, asset: ImageAsset) -> Result<Self, RendererError> {
        let handle = gl.create_texture().map_err(RendererError::GpuResource)?;
        let texture = Self {
            gl,
            handle,
            width: asset.width(),
            height: asset.height(),
        };
        texture.upload(&asset)?;

        tracing::debug!(
            texture = ?texture.handle,
            width = texture.width,
            height = texture.height,
            channels = asset.channel_count(),
            "texture uploaded"
        );
        Ok(texture)
    }

    fn upload(&self, asset: &ImageAsset) -> Result<(), RendererError> {
        let width = gl_dimension(asset.width(), "width")?;
        let height = gl_dimension(asset.height(), "height")?;

        let gl = &self.gl;
        gl.bind_texture(glow::TEXTURE_2D, Some(self.handle));

        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, glow::REPEAT as i32);
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MIN_FILTER,
            glow::NEAREST_MIPMAP_NEAREST as i32,
        );
        gl.tex_parameter_i32(
            glow::TEXTURE_2D,
            glow::TEXTURE_MAG_FILTER,
            glow::NEAREST as i32,
        );

        // Rows are tightly packed; RGB rows are not 4-byte aligned in general.
        gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

        gl.tex_image_2d(
            glow::TEXTURE_2D,
            0,
            glow::RGB as i32,
            width,
            height,
            0,
            source_format(asset.format()),
            glow::UNSIGNED_BYTE,
            Some(asset.pixels()),
        );
        gl.generate_mipmap(glow::TEXTURE_2D);
        Ok(())
    }

    pub fn handle(&self) -> G::Texture {
        self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl<G: GlApi> Drop for GpuTexture<G> {
    fn drop(&mut self) {
        self.gl.delete_texture(self.handle);
    }
}

fn gl_dimension(value: u32, name: &str) -> Result<i32, RendererError> {
    i32::try_from(value)
        .map_err(|_| RendererError::GpuResource(format!("texture {name} {value} too large")))
}

/// GL source format for a pixel layout.
pub fn source_format(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::Rgb => glow::RGB,
        PixelFormat::Rgba => glow::RGBA,
    }
}
