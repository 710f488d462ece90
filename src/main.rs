use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod handlers;
mod router;
mod schemas;
mod snapshots;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

use cli::Cli;
use config::Settings;

/// Main entry point for the SES dashboard binary.
#[tokio::main]
async fn main() -> Result<()> {
    // Before the filter is built so RUST_LOG may come from .env
    dotenvy::dotenv().ok();

    // Logs go to stderr so `render` and `inspect` can write to stdout
    tracing_subscriber::registry()
        .with(config::log_filter(config::LOG_FILTER_ENV))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load()?;
    info!("Configuration loaded");

    let cli = Cli::parse();
    cli.run(settings).await?;

    Ok(())
}
