//! Job identifier type

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identifier for a server-side job
///
/// Typically a UUID, but the watcher treats it as an opaque string: it is
/// embedded verbatim in the status endpoint path and never interpreted.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

/// Error returned when a job identifier fails validation
#[derive(Debug, Error)]
#[error("job id cannot be empty")]
pub struct InvalidJobId;

impl JobId {
    /// Create a job identifier from a string
    ///
    /// Rejects empty and whitespace-only input; everything else is accepted
    /// as-is.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidJobId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidJobId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for JobId {
    type Err = InvalidJobId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
