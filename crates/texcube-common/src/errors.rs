use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Top-level application error.
///
/// Renderer failures arrive as their rendered message; the renderer's own
/// error type stays inside the renderer crate.
#[derive(Debug, thiserror::Error)]
pub enum TexcubeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(String),

    #[error("GL context error: {0}")]
    Context(String),

    #[error("renderer error: {0}")]
    Renderer(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 0".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 0");
    }

    #[test]
    fn texcube_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TexcubeError = config_err.into();
        assert!(matches!(err, TexcubeError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn texcube_error_other_variants() {
        let err = TexcubeError::Window("no display".into());
        assert_eq!(err.to_string(), "window error: no display");

        let err = TexcubeError::Context("no GL 3.3 config".into());
        assert_eq!(err.to_string(), "GL context error: no GL 3.3 config");

        let err = TexcubeError::Renderer("shader program linking failed: x".into());
        assert_eq!(
            err.to_string(),
            "renderer error: shader program linking failed: x"
        );
    }
}
