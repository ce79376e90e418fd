//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use texcube_common::TexcubeError;

use super::core::TexcubeApp;

impl ApplicationHandler for TexcubeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.graphics.is_some() {
            return;
        }

        match self.initialize_graphics(event_loop) {
            Ok(graphics) => {
                graphics.window.request_redraw();
                self.graphics = Some(graphics);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.close(event_loop);
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("escape pressed");
                self.close(event_loop);
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render_frame() {
                    self.fail(event_loop, e);
                    return;
                }
                if let Some(graphics) = &self.graphics {
                    graphics.window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

impl TexcubeApp {
    /// Release GL resources while the context is still current, then stop.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.graphics = None;
        event_loop.exit();
    }

    /// Record a fatal error; it is reported once the event loop returns.
    fn fail(&mut self, event_loop: &ActiveEventLoop, error: TexcubeError) {
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        self.close(event_loop);
    }
}
