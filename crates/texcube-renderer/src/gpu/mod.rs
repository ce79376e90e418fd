mod debug;
mod device;
mod glow_device;
mod types;

#[cfg(test)]
pub(crate) mod recording;

pub use debug::{install_debug_hook, log_debug_message};
pub use device::*;
pub use glow_device::*;
pub use types::*;
