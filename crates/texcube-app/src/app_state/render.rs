//! Per-frame rendering.

use glutin::surface::GlSurface;

use texcube_common::TexcubeError;

use super::core::TexcubeApp;

/// Seconds between frame-rate log lines.
const FPS_REPORT_INTERVAL: f32 = 5.0;

impl TexcubeApp {
    /// Clear, draw the cube for the current time, and present.
    pub(super) fn render_frame(&mut self) -> Result<(), TexcubeError> {
        let Some(graphics) = &self.graphics else {
            return Ok(());
        };

        let elapsed = self.clock.elapsed_secs();
        graphics.render_state.begin_frame();
        graphics.render_state.draw(elapsed);
        graphics
            .surface
            .swap_buffers(&graphics.context)
            .map_err(|e| TexcubeError::Context(format!("swap failed: {e}")))?;

        self.clock.tick();
        if elapsed - self.last_fps_report >= FPS_REPORT_INTERVAL {
            tracing::debug!(
                fps = self.clock.fps(),
                frames = self.clock.frames(),
                "frame rate"
            );
            self.last_fps_report = elapsed;
        }
        Ok(())
    }
}
