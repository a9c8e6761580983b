//! Status endpoint access

use crate::StatusClient;
use crate::error::Result;
use jobwatch_core::{JobId, StatusReport};

impl StatusClient {
    /// Fetch the current status report for a job
    ///
    /// Issues `GET {base_url}/status/{job_id}` and parses the JSON body.
    /// A non-success status code or an unparsable body is an error; what
    /// the report *means* is up to the caller (see
    /// [`StatusReport::state`](jobwatch_core::StatusReport::state)).
    pub async fn fetch_status(&self, job_id: &JobId) -> Result<StatusReport> {
        let url = self.status_url(job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// The status endpoint URL for a job: `{base_url}/status/{job_id}`
    pub(crate) fn status_url(&self, job_id: &JobId) -> String {
        format!("{}/status/{}", self.base_url, job_id)
    }
}
