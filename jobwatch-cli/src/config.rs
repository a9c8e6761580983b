//! CLI configuration
//!
//! Holds the status server URL and polling interval, validated before the
//! first request goes out.

use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the status server (e.g., "https://example.org")
    pub base_url: String,

    /// Time between consecutive status checks
    pub poll_interval: Duration,
}

impl Config {
    /// Creates a new configuration
    pub fn new(base_url: String, poll_interval: Duration) -> Self {
        Self {
            base_url,
            poll_interval,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("base url cannot be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!("base url must start with http:// or https://");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll interval must be greater than 0");
        }

        Ok(())
    }
}
