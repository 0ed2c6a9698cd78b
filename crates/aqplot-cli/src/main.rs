//! aqplot - Main Entry Point

use anyhow::{Context, Result};
use aqplot_cli::{run, Args};
use aqplot_common::init_logging;
use aqplot_config::ConfigLoader;
use clap::Parser;
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = ConfigLoader::load_from(args.config.as_deref()).context("loading configuration")?;

    // Initialize logging
    let mut logging = config.logging.to_logging_config();
    if let Some(level) = &args.log_level {
        logging.level.clone_from(level);
    }
    init_logging(logging).context("initializing logging")?;

    info!(version = env!("CARGO_PKG_VERSION"), "starting aqplot");

    if let Err(e) = run(&config, &args, io::stdin().lock(), io::stdout().lock()) {
        error!(error = %e, "chart generation failed");
        return Err(e).context("generating chart configuration");
    }

    Ok(())
}
