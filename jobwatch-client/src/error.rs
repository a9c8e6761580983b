//! Error types for the jobwatch client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when fetching a job status
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connection refused, DNS, timeout, ...)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Server returned a non-success status code
    #[error("API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the server
        message: String,
    },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a "not found" error (unknown job id)
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 400 && *status < 500)
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let not_found = ClientError::api_error(404, "no such job");
        assert!(not_found.is_not_found());
        assert!(not_found.is_client_error());
        assert!(!not_found.is_server_error());

        let unavailable = ClientError::api_error(503, "maintenance");
        assert!(unavailable.is_server_error());
        assert!(!unavailable.is_client_error());

        let parse = ClientError::ParseError("not json".to_string());
        assert!(!parse.is_client_error());
        assert!(!parse.is_server_error());
    }
}
