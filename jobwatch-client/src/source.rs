//! Transport seam between the poller and the HTTP client

use async_trait::async_trait;

use crate::StatusClient;
use crate::error::Result;
use jobwatch_core::{JobId, StatusReport};

/// Source of status reports for a job
///
/// The poller depends on this trait rather than on `StatusClient` directly
/// so the polling loop can be exercised against a scripted source in tests.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetch the current status report for the given job
    async fn fetch(&self, job_id: &JobId) -> Result<StatusReport>;
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn fetch(&self, job_id: &JobId) -> Result<StatusReport> {
        self.fetch_status(job_id).await
    }
}
