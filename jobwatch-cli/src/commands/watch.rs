//! Watch a job until it leaves the pending state

use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use jobwatch_client::{PollConfig, StatusClient, StatusPoller};
use jobwatch_core::JobId;

use crate::config::Config;

/// Poll the job's status on the configured interval until it is no longer
/// pending, then print the final status
pub async fn run(config: &Config, job_id: &str) -> Result<()> {
    let job_id: JobId = job_id.parse().context("Invalid job id")?;
    let client = StatusClient::new(&config.base_url);

    println!(
        "{}",
        format!(
            "Watching job {} (checking every {:?})",
            job_id, config.poll_interval
        )
        .dimmed()
    );

    let poller = StatusPoller::with_config(
        Arc::new(client),
        job_id,
        PollConfig::new(config.poll_interval),
    );

    // Dropping the handle would cancel the poll; waiting hands back the
    // first non-pending status.
    let status = poller.spawn().wait().await?;

    match &status.status {
        Some(s) => println!("{} {}", "Job finished:".bold(), s.green().bold()),
        None => println!(
            "{} {}",
            "Job finished:".bold(),
            "(no status reported)".yellow()
        ),
    }

    Ok(())
}
