//! GLSL shader stages and linked programs.
//!
//! A `ShaderUnit` owns one compiled stage; `ShaderProgram::link` consumes
//! a vertex and a fragment unit and releases both once linking is done.

mod program;
mod stage;
mod unit;

pub use program::*;
pub use stage::*;
pub use unit::*;

/// Upper bound, in bytes, on driver diagnostic logs carried in errors.
pub const INFO_LOG_CAPACITY: usize = 512;

/// Clamp a driver log to `INFO_LOG_CAPACITY` bytes on a char boundary and
/// make sure it is never empty.
pub(crate) fn bounded_log(mut log: String) -> String {
    if log.len() > INFO_LOG_CAPACITY {
        let mut end = INFO_LOG_CAPACITY;
        while !log.is_char_boundary(end) {
            end -= 1;
        }
        log.truncate(end);
    }
    let trimmed = log.trim_end();
    if trimmed.is_empty() {
        return "driver reported no diagnostic log".to_string();
    }
    trimmed.to_string()
}
