//! Decoded image files ready for texture upload.

use std::path::Path;

use crate::gpu::RendererError;

/// Channel layout of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channel_count(self) -> u8 {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }

    fn from_channel_count(channels: u8) -> Option<Self> {
        match channels {
            3 => Some(PixelFormat::Rgb),
            4 => Some(PixelFormat::Rgba),
            _ => None,
        }
    }
}

/// A decoded image: dimensions, channel layout and a tightly packed,
/// exclusively owned pixel buffer of `width * height * channels` bytes.
///
/// Deliberately not `Clone`; the buffer moves into the texture upload and
/// is released as soon as the upload returns.
#[derive(Debug)]
pub struct ImageAsset {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Box<[u8]>,
}

impl ImageAsset {
    /// Decode the image file at `path`.
    ///
    /// Only 3-channel (RGB) and 4-channel (RGBA) images are accepted; any
    /// other layout, a missing file or corrupt data is a `Decode` error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RendererError> {
        let path = path.as_ref();
        let decode_err = |reason: String| RendererError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let image = image::open(path).map_err(|e| decode_err(e.to_string()))?;
        let channels = image.color().channel_count();
        let format = PixelFormat::from_channel_count(channels).ok_or_else(|| {
            decode_err(format!(
                "unsupported channel count {channels} (expected 3 or 4)"
            ))
        })?;

        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(decode_err(format!("empty image ({width}x{height})")));
        }

        let pixels = match format {
            PixelFormat::Rgb => image.into_rgb8().into_raw(),
            PixelFormat::Rgba => image.into_rgba8().into_raw(),
        };

        tracing::debug!(
            path = %path.display(),
            width,
            height,
            channels,
            "decoded image"
        );

        Ok(Self {
            width,
            height,
            format,
            pixels: pixels.into_boxed_slice(),
        })
    }

    /// Build an asset from an in-memory pixel buffer.
    ///
    /// Returns `None` if a dimension is zero or the buffer length is not
    /// exactly `width * height * channels`.
    pub fn from_raw(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(format.channel_count() as usize)?;
        if width == 0 || height == 0 || pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            format,
            pixels: pixels.into_boxed_slice(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn channel_count(&self) -> u8 {
        self.format.channel_count()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
