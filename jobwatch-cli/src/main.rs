//! Jobwatch CLI
//!
//! Command-line interface for watching an asynchronous server-side job
//! until it leaves the pending state.

mod commands;
mod config;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{Commands, handle_command};
use config::Config;

#[derive(Parser)]
#[command(name = "jobwatch")]
#[command(about = "Watch a job's status endpoint until it leaves pending", long_about = None)]
struct Cli {
    /// Base URL of the status server
    #[arg(
        long,
        env = "JOBWATCH_URL",
        default_value = "http://localhost:8080"
    )]
    url: String,

    /// Polling interval in milliseconds
    #[arg(long, env = "JOBWATCH_POLL_INTERVAL_MS", default_value_t = 2000)]
    interval_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobwatch_cli=warn,jobwatch_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.url, Duration::from_millis(cli.interval_ms));
    config.validate()?;

    debug!(
        "Loaded configuration: base_url={}, poll_interval={:?}",
        config.base_url, config.poll_interval
    );

    handle_command(cli.command, &config).await
}
