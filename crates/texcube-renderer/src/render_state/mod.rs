//! The single-object, single-pass renderer.
//!
//! `RenderState::new` takes the scene from nothing to ready in one step:
//! viewport, debug hook, depth test, clear colour, then shaders, program,
//! geometry and textures. Any failure aborts construction and releases
//! whatever had been created. After that, `draw` only binds existing
//! objects and writes uniforms.

mod state;


pub use state::*;
