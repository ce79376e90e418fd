//! Vertex data, its attribute layout, and the GPU buffers that hold it.

mod buffer;
mod layout;
mod mesh;

pub use buffer::*;
pub use layout::*;
pub use mesh::*;
