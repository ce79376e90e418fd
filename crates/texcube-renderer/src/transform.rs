//! Model/view/projection matrices for one frame.
//!
//! Column-major `glam::Mat4`, OpenGL clip-space conventions (depth in
//! -1..1). Everything here is a pure function of elapsed time and the
//! viewport; nothing is cached between frames.

use glam::{Mat4, Vec3};

use crate::gpu::Viewport;

/// Axis the cube spins around (normalized before use).
pub const ROTATION_AXIS: Vec3 = Vec3::new(0.5, 1.0, 0.0);
/// Spin rate in degrees per second.
pub const ROTATION_DEGREES_PER_SEC: f32 = 50.0;
/// Camera offset applied to the whole scene.
pub const VIEW_TRANSLATION: Vec3 = Vec3::new(0.0, 0.0, -3.0);
/// Vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

/// The three matrices uploaded each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTransforms {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl FrameTransforms {
    /// Transforms at `elapsed_secs` seconds since start.
    pub fn at(elapsed_secs: f32, viewport: Viewport) -> Self {
        Self {
            model: model_matrix(elapsed_secs),
            view: view_matrix(),
            projection: projection_matrix(viewport),
        }
    }
}

/// Rotation about `ROTATION_AXIS` by `ROTATION_DEGREES_PER_SEC * t`.
pub fn model_matrix(elapsed_secs: f32) -> Mat4 {
    let angle = elapsed_secs * ROTATION_DEGREES_PER_SEC.to_radians();
    Mat4::from_axis_angle(ROTATION_AXIS.normalize(), angle)
}

pub fn view_matrix() -> Mat4 {
    Mat4::from_translation(VIEW_TRANSLATION)
}

pub fn projection_matrix(viewport: Viewport) -> Mat4 {
    Mat4::perspective_rh_gl(
        FOV_Y_DEGREES.to_radians(),
        viewport.aspect_ratio(),
        Z_NEAR,
        Z_FAR,
    )
}

// =============================================================================
// Tests
// =============================================================================
