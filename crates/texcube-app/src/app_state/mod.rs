//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the GL context and the render state.

mod core;
mod event_handler;
mod init;
mod render;

pub use core::TexcubeApp;
