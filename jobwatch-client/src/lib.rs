//! Jobwatch HTTP Client
//!
//! A small, type-safe client for a job status endpoint, plus the poller
//! that watches a job until it leaves the pending state.
//!
//! The server contract is a single route: `GET {base_url}/status/{job_id}`
//! returns a JSON object whose `job-status` field is `"pending"` while the
//! job is in progress and anything else once it has finished.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use jobwatch_client::{StatusClient, StatusPoller};
//! use jobwatch_core::JobId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = StatusClient::new("https://example.org");
//!     let job_id = JobId::new("5f1e6f8c-2c3a-4d61-9f0e-7b8a2f9d4c11")?;
//!
//!     // Poll every two seconds until the job leaves "pending".
//!     let poller = StatusPoller::new(Arc::new(client), job_id);
//!     let terminal = poller.run().await;
//!
//!     println!("job finished: {}", terminal);
//!     Ok(())
//! }
//! ```

pub mod error;
mod poller;
mod source;
mod status;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{DEFAULT_POLL_INTERVAL, PollConfig, PollerHandle, StatusPoller, WaitError};
pub use source::StatusSource;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job status endpoint
///
/// Wraps a `reqwest::Client` with the base URL of the server hosting the
/// status route. Cloning is cheap; the underlying connection pool is
/// shared.
#[derive(Debug, Clone)]
pub struct StatusClient {
    /// Base URL of the status server (e.g., "https://example.org")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl StatusClient {
    /// Create a new status client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the status server; a trailing slash
    ///   is trimmed so endpoint paths join cleanly
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the status server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}
