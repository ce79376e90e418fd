//! The fixed textured cube.

use super::layout::VERTEX_STRIDE_FLOATS;

/// Vertices drawn by the non-indexed path.
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin as 12 triangles, no index buffer.
/// Each row is `x, y, z, u, v`.
#[rustfmt::skip]
pub const CUBE_VERTICES: [f32; CUBE_VERTEX_COUNT * VERTEX_STRIDE_FLOATS] = [
    // back face
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,
    // front face
    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    // left face
    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,
    // right face
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    // bottom face
    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    // top face
    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

/// The cube is drawn without indices.
pub const CUBE_INDICES: [u32; 0] = [];

/// CPU-side mesh description handed to `GeometryBuffer::new`.
#[derive(Debug, Clone, Copy)]
pub struct MeshData<'a> {
    pub vertices: &'a [f32],
    /// Empty means no index buffer and a non-indexed draw.
    pub indices: &'a [u32],
}

impl MeshData<'static> {
    pub const CUBE: Self = Self {
        vertices: &CUBE_VERTICES,
        indices: &CUBE_INDICES,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_has_36_vertices() {
        assert_eq!(CUBE_VERTICES.len() / VERTEX_STRIDE_FLOATS, 36);
    }

    #[test]
    fn cube_positions_are_on_the_unit_box() {
        for v in CUBE_VERTICES.chunks_exact(VERTEX_STRIDE_FLOATS) {
            for &c in &v[..3] {
                assert!(
                    (c.abs() - 0.5).abs() < f32::EPSILON,
                    "position component {c}"
                );
            }
        }
    }

    #[test]
    fn cube_texcoords_in_unit_range() {
        for v in CUBE_VERTICES.chunks_exact(VERTEX_STRIDE_FLOATS) {
            for &c in &v[3..] {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn cube_is_unindexed() {
        assert!(MeshData::CUBE.indices.is_empty());
    }
}
