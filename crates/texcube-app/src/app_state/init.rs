//! Window, GL context and renderer initialization.

use std::num::NonZeroU32;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, SwapInterval};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use texcube_common::TexcubeError;
use texcube_renderer::{GlowDevice, RenderState, Viewport};

use super::core::{Graphics, TexcubeApp};

const DEPTH_BITS: u8 = 24;

impl TexcubeApp {
    /// Create the window, make a GL context current on it and build the
    /// render state.
    pub(super) fn initialize_graphics(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<Graphics, TexcubeError> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(PhysicalSize::new(window_config.width, window_config.height))
            .with_resizable(false);

        let template = ConfigTemplateBuilder::new().with_depth_size(DEPTH_BITS);
        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs.clone()))
            .build(event_loop, template, pick_config)
            .map_err(|e| TexcubeError::Context(format!("no suitable GL config: {e}")))?;

        let raw_window_handle = window
            .as_ref()
            .and_then(|w| w.window_handle().ok())
            .map(|h| h.as_raw());
        let gl_display = gl_config.display();
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .with_debug(true)
            .build(raw_window_handle);

        // SAFETY: the config came from this display.
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .map_err(|e| TexcubeError::Context(format!("cannot create GL 3.3 context: {e}")))?;

        let window = match window {
            Some(window) => window,
            None => glutin_winit::finalize_window(event_loop, attrs, &gl_config)
                .map_err(|e| TexcubeError::Window(e.to_string()))?,
        };

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .map_err(|e| TexcubeError::Window(e.to_string()))?;
        // SAFETY: the window outlives the surface (see `Graphics` field order).
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .map_err(|e| TexcubeError::Context(e.to_string()))?;
        let context = not_current
            .make_current(&surface)
            .map_err(|e| TexcubeError::Context(e.to_string()))?;

        let interval = if window_config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            tracing::warn!("failed to set swap interval: {e}");
        }

        // SAFETY: the context is current on this thread and stays current
        // for as long as the render state lives.
        let device = unsafe {
            GlowDevice::new(glow::Context::from_loader_function_cstr(|name| {
                gl_display.get_proc_address(name)
            }))
        };

        let size = window.inner_size();
        let viewport = Viewport::new(size.width, size.height);
        let render_state = RenderState::new(device, viewport, &self.assets)
            .map_err(|e| TexcubeError::Renderer(e.to_string()))?;

        tracing::info!(
            width = size.width,
            height = size.height,
            samples = gl_config.num_samples(),
            "window created and renderer initialized"
        );

        Ok(Graphics {
            render_state,
            surface,
            context,
            window,
        })
    }
}

/// Prefer the config with the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| {
            if c.num_samples() > best.num_samples() {
                c
            } else {
                best
            }
        })
        // glutin reports an error before calling the picker when nothing matches.
        .expect("display offered no GL configs")
}
