//! TexcubeApp struct definition and constructor.

use glutin::context::PossiblyCurrentContext;
use glutin::surface::{Surface, WindowSurface};
use winit::window::Window;

use texcube_common::TexcubeError;
use texcube_config::schema::{AssetsConfig, TexcubeConfig};
use texcube_renderer::{FrameClock, RenderState};

/// Everything tied to the live GL context.
///
/// Field order is drop order: GL objects are deleted while the context is
/// still current, and the window goes last.
pub(super) struct Graphics {
    pub(super) render_state: RenderState,
    pub(super) surface: Surface<WindowSurface>,
    pub(super) context: PossiblyCurrentContext,
    pub(super) window: Window,
}

/// Top-level application state.
pub struct TexcubeApp {
    pub(super) config: TexcubeConfig,
    /// Asset paths with the base directory already applied.
    pub(super) assets: AssetsConfig,

    pub(super) graphics: Option<Graphics>,
    pub(super) clock: FrameClock,
    pub(super) last_fps_report: f32,

    // First fatal error; the event loop exits once this is set.
    pub(super) failure: Option<TexcubeError>,
}

impl TexcubeApp {
    pub fn new(config: TexcubeConfig, assets: AssetsConfig) -> Self {
        Self {
            config,
            assets,
            graphics: None,
            clock: FrameClock::new(),
            last_fps_report: 0.0,
            failure: None,
        }
    }

    /// Error that stopped the event loop, if any.
    pub fn take_failure(&mut self) -> Option<TexcubeError> {
        self.failure.take()
    }
}
