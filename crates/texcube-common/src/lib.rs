pub mod errors;

pub use errors::{ConfigError, TexcubeError};

pub type Result<T> = std::result::Result<T, TexcubeError>;
