//! Subscriber setup.

use tracing_subscriber::EnvFilter;

const FALLBACK_DIRECTIVE: &str = "info";

/// Pick the filter directive: `RUST_LOG` wins, then the command line, then
/// the config file.
pub fn select_directive<'a>(
    env: Option<&'a str>,
    cli: Option<&'a str>,
    config: &'a str,
) -> &'a str {
    env.filter(|s| !s.trim().is_empty())
        .or(cli)
        .unwrap_or(config)
}

/// Install the global fmt subscriber.
pub fn init(cli_level: Option<&str>, config_level: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = select_directive(env.as_deref(), cli_level, config_level);

    let filter = EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("invalid log directive '{directive}': {e}; using '{FALLBACK_DIRECTIVE}'");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    });

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
