//! Status report wire format and pending/terminal classification

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The status value the server reports while a job is still in progress
pub const PENDING_STATUS: &str = "pending";

/// A job status response as returned by `GET /status/{job_id}`
///
/// Only the `job-status` field is read. It is optional and untyped on the
/// wire: servers are expected to send a string, but the watcher makes no
/// assumption beyond "equal to `pending` or not". Unknown fields are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    /// Raw `job-status` value, if the response carried one
    #[serde(rename = "job-status", default, skip_serializing_if = "Option::is_none")]
    pub job_status: Option<Value>,
}

impl StatusReport {
    /// Build a report carrying the given status string
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            job_status: Some(Value::String(status.into())),
        }
    }

    /// The status as a string, if the response carried a string value
    pub fn status_str(&self) -> Option<&str> {
        self.job_status.as_ref().and_then(Value::as_str)
    }

    /// Classify this report as pending or terminal
    ///
    /// A report is pending iff `job-status` is exactly the string
    /// `"pending"`. Everything else, including a missing field or a
    /// non-string value, is terminal. This matches the server contract:
    /// `pending` is the only in-progress value, and any other observation
    /// means the job has finished one way or another.
    pub fn state(&self) -> JobState {
        match self.status_str() {
            Some(PENDING_STATUS) => JobState::Pending,
            _ => JobState::Terminal(TerminalStatus {
                status: self.status_str().map(str::to_owned),
            }),
        }
    }
}

/// Two-state view of a job: still pending, or finished
///
/// `Terminal` is absorbing: once a poller observes it, polling stops and
/// there is no transition back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobState {
    /// The job is still in progress
    Pending,
    /// The job has left the pending state
    Terminal(TerminalStatus),
}

impl JobState {
    /// Whether this state is `Pending`
    pub fn is_pending(&self) -> bool {
        matches!(self, JobState::Pending)
    }
}

/// The final status observed for a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalStatus {
    /// The reported status string, e.g. `done` or `failed`
    ///
    /// `None` when the response omitted the `job-status` field or carried a
    /// non-string value. The job is still treated as finished in that case;
    /// callers that care can surface the distinction.
    pub status: Option<String>,
}

impl std::fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.status {
            Some(status) => write!(f, "{}", status),
            None => write!(f, "(no status reported)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> StatusReport {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_pending_is_pending() {
        let report = parse(r#"{"job-status": "pending"}"#);
        assert_eq!(report.state(), JobState::Pending);
    }

    #[test]
    fn test_any_other_status_is_terminal() {
        for status in ["done", "failed", "cancelled", "Pending", "PENDING"] {
            let report = StatusReport::with_status(status);
            assert_eq!(
                report.state(),
                JobState::Terminal(TerminalStatus {
                    status: Some(status.to_string())
                }),
                "status {status:?} should be terminal"
            );
        }
    }

    #[test]
    fn test_missing_field_is_terminal_without_status() {
        let report = parse(r#"{"something-else": 42}"#);
        assert_eq!(
            report.state(),
            JobState::Terminal(TerminalStatus { status: None })
        );
    }

    #[test]
    fn test_non_string_status_is_terminal_without_status() {
        let report = parse(r#"{"job-status": 7}"#);
        assert_eq!(
            report.state(),
            JobState::Terminal(TerminalStatus { status: None })
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let report = parse(r#"{"job-status": "pending", "progress": 0.5, "eta": "soon"}"#);
        assert!(report.state().is_pending());
    }

    #[test]
    fn test_terminal_status_display() {
        let done = TerminalStatus {
            status: Some("done".to_string()),
        };
        assert_eq!(done.to_string(), "done");

        let unknown = TerminalStatus { status: None };
        assert_eq!(unknown.to_string(), "(no status reported)");
    }
}
