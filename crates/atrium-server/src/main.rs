//! Atrium Server - Main Entry Point

use anyhow::{Context, Result};
use atrium_common::init_logging;
use atrium_config::{Config, ConfigLoader};
use atrium_server::AtriumServer;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (YAML or TOML)
    #[arg(short, long, env = "ATRIUM_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration
    #[arg(short, long)]
    log_level: Option<String>,

    /// Socket address to bind, overriding the configuration
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    init_logging(&config.logging).context("failed to initialize logging")?;
    info!("Starting Atrium server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        default_locale = %config.i18n.default_locale,
        locales = ?config.i18n.supported_locales,
        "Locale configuration loaded"
    );

    let server = AtriumServer::new(config).context("failed to build server")?;

    if let Err(e) = server.run().await {
        error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ConfigLoader::load().context("failed to load configuration")?,
    };

    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if let Some(bind) = &args.bind {
        config.server.bind_address.clone_from(bind);
    }

    config.validate()?;
    Ok(config)
}
