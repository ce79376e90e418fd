mod app_state;
mod cli;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use texcube_common::TexcubeError;
use texcube_config::schema::LoggingConfig;
use winit::event_loop::EventLoop;

fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can seed the filter.
    let config = texcube_config::load_config(args.config.as_deref());
    let config_level = match &config {
        Ok(config) => config.logging.level.clone(),
        Err(_) => LoggingConfig::default().level,
    };
    logging::init(args.log_level.as_deref(), &config_level);

    tracing::info!("texcube v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args, config) {
        Ok(()) => {
            tracing::info!("shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("texcube: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(
    args: cli::Args,
    config: Result<texcube_config::TexcubeConfig, texcube_common::ConfigError>,
) -> texcube_common::Result<()> {
    let config = config?;
    tracing::info!(
        "config loaded ({}x{}, vsync: {})",
        config.window.width,
        config.window.height,
        config.window.vsync
    );

    let base = match args.assets {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };
    let assets = config.assets.resolved_against(&base);
    tracing::debug!(base = %base.display(), "asset paths resolved");

    let event_loop = EventLoop::new().map_err(|e| TexcubeError::Window(e.to_string()))?;
    let mut app = app_state::TexcubeApp::new(config, assets);

    tracing::info!("entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| TexcubeError::Window(e.to_string()))?;

    match app.take_failure() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
