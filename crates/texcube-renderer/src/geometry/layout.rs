//! Interleaved vertex layout: position(vec3) + texcoord(vec2) per vertex.

/// Floats per interleaved vertex.
pub const VERTEX_STRIDE_FLOATS: usize = 5;

/// Shader attribute index of the position input.
pub const POSITION_LOCATION: u32 = 0;
/// Shader attribute index of the texture-coordinate input.
pub const TEXCOORD_LOCATION: u32 = 3;

/// One vertex attribute read from the interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Shader input index (`layout(location = N)`).
    pub location: u32,
    /// Number of float components.
    pub components: i32,
    /// Offset of the first component inside a vertex, in floats.
    pub offset_floats: usize,
}

impl VertexAttribute {
    pub const fn byte_offset(&self) -> i32 {
        (self.offset_floats * std::mem::size_of::<f32>()) as i32
    }
}

/// Ordered attribute list plus the shared stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexLayout {
    pub stride_floats: usize,
    pub attributes: &'static [VertexAttribute],
}

impl VertexLayout {
    /// Position at float offset 0, texture coordinate at float offset 3.
    pub const POSITION_TEXCOORD: Self = Self {
        stride_floats: VERTEX_STRIDE_FLOATS,
        attributes: &[
            VertexAttribute {
                location: POSITION_LOCATION,
                components: 3,
                offset_floats: 0,
            },
            VertexAttribute {
                location: TEXCOORD_LOCATION,
                components: 2,
                offset_floats: 3,
            },
        ],
    };

    pub const fn stride_bytes(&self) -> i32 {
        (self.stride_floats * std::mem::size_of::<f32>()) as i32
    }

    /// Whether the attributes tile each vertex exactly, in order and
    /// without gaps or overlap.
    pub fn is_packed(&self) -> bool {
        let mut next = 0;
        for attr in self.attributes {
            if attr.offset_floats != next || attr.components <= 0 {
                return false;
            }
            next += attr.components as usize;
        }
        next == self.stride_floats
    }
}
