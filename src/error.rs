//! Error types for the lookup pipeline
//!
//! Idiomatic error taxonomy using thiserror. Failures propagate upward
//! unchanged; the orchestrator is the sole recovery boundary.

use thiserror::Error;

/// Main error type for the lookup pipeline
#[derive(Error, Debug)]
pub enum FetchError {
    /// Lower-level transport failure (DNS, connection refused, timeout)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the API
    #[error("HTTP error {status}: {reason}")]
    HttpStatus { status: u16, reason: String },

    /// Response body was not the expected JSON shape
    #[error("failed to parse response from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Batch input that cannot be turned into a list of ids
    #[error("invalid batch input: {0}")]
    InvalidInput(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_display() {
        let err = FetchError::HttpStatus {
            status: 404,
            reason: "Not Found".to_string(),
        };
        assert_eq!(format!("{}", err), "HTTP error 404: Not Found");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = FetchError::InvalidInput("empty id list".to_string());
        assert_eq!(format!("{}", err), "invalid batch input: empty id list");
    }
}
