mod cli;
mod logging;
mod progress;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use grab_engine::ReqwestFetcher;
use grab_logging::{grab_info, level_for_verbosity};

use crate::cli::Cli;
use crate::progress::TerminalProgress;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(destination) = cli.log.destination() {
        logging::initialize(destination, level_for_verbosity(cli.verbose));
    }

    let config = cli.into_config();
    let fetcher = ReqwestFetcher::new(&config.fetch).context("failed to build HTTP client")?;

    grab_info!("grab starting, output {:?}", config.output_dir);
    let summary = grab_engine::run(config, Arc::new(fetcher), Box::new(TerminalProgress::new()))
        .await
        .context("invalid configuration")?;

    for report in &summary.feeds {
        grab_info!("{}: {} scheduled", report.feed, report.scheduled);
    }
    Ok(())
}
