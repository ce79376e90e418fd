use std::path::PathBuf;

use clap::Parser;

/// Texcube: a textured cube spinning in an OpenGL window.
#[derive(Parser, Debug)]
#[command(name = "texcube", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive (e.g. "debug", "texcube_renderer=trace").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Base directory for relative asset paths (default: current directory).
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments() {
        let args = Args::try_parse_from(["texcube"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.log_level.is_none());
        assert!(args.assets.is_none());
    }

    #[test]
    fn all_arguments() {
        let args = Args::try_parse_from([
            "texcube",
            "--config",
            "/tmp/texcube.toml",
            "--log-level",
            "debug",
            "--assets",
            "/opt/texcube",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/texcube.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.assets, Some(PathBuf::from("/opt/texcube")));
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["texcube", "--fullscreen"]).is_err());
    }
}
