//! Driver debug-message hook.
//!
//! Messages are observability only: they are forwarded to `tracing` and
//! never alter control flow.

use tracing::Level;

use super::device::{DebugMessage, GlApi};

/// Install the debug-message hook if the context supports it.
///
/// Returns whether the hook was installed.
pub fn install_debug_hook<G: GlApi>(gl: &mut G) -> bool {
    if !gl.supports_debug() {
        tracing::warn!("GL context lacks debug output; driver messages will not be logged");
        return false;
    }
    gl.debug_message_callback(log_debug_message);
    tracing::debug!("GL debug-message hook installed");
    true
}

/// Log level for a driver message. Error-type messages are errors whatever
/// severity the driver attached.
pub fn debug_level(gl_type: u32, severity: u32) -> Level {
    if gl_type == glow::DEBUG_TYPE_ERROR {
        return Level::ERROR;
    }
    match severity {
        glow::DEBUG_SEVERITY_HIGH => Level::WARN,
        glow::DEBUG_SEVERITY_MEDIUM => Level::INFO,
        glow::DEBUG_SEVERITY_LOW => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Forward one driver message to the log at its `debug_level`.
pub fn log_debug_message(msg: DebugMessage<'_>) {
    let DebugMessage {
        source,
        gl_type,
        id,
        severity,
        message,
    } = msg;

    match debug_level(gl_type, severity) {
        Level::ERROR => tracing::error!(source, gl_type, id, severity, "GL ERROR: {message}"),
        Level::WARN => tracing::warn!(source, gl_type, id, "GL: {message}"),
        Level::INFO => tracing::info!(source, gl_type, id, "GL: {message}"),
        Level::DEBUG => tracing::debug!(source, gl_type, id, "GL: {message}"),
        _ => tracing::trace!(source, gl_type, id, severity, "GL: {message}"),
    }
}
