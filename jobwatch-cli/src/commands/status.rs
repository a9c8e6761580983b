//! One-shot status check

use anyhow::{Context, Result};
use colored::*;
use jobwatch_client::StatusClient;
use jobwatch_core::{JobId, JobState};

use crate::config::Config;

/// Fetch the job's status once and print the classified state
pub async fn run(config: &Config, job_id: &str) -> Result<()> {
    let job_id: JobId = job_id.parse().context("Invalid job id")?;
    let client = StatusClient::new(&config.base_url);

    let report = client
        .fetch_status(&job_id)
        .await
        .context("Failed to fetch job status")?;

    match report.state() {
        JobState::Pending => println!("{}", "pending".yellow().bold()),
        JobState::Terminal(status) => match &status.status {
            Some(s) => println!("{}", s.green().bold()),
            None => println!("{}", "finished (no status reported)".yellow()),
        },
    }

    Ok(())
}
