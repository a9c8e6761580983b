//! Command handlers
//!
//! Routes CLI subcommands to their handlers.

mod status;
mod watch;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check the job's status once and print it
    Status {
        /// Job identifier (e.g., a UUID)
        job_id: String,
    },
    /// Poll the job's status until it leaves the pending state
    Watch {
        /// Job identifier (e.g., a UUID)
        job_id: String,
    },
}

/// Handle a parsed command
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Status { job_id } => status::run(config, &job_id).await,
        Commands::Watch { job_id } => watch::run(config, &job_id).await,
    }
}
