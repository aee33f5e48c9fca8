// Client Error Types
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by the HTTP wrapper, the handlers and the session utilities
#[derive(Debug, Error)]
pub enum ClientError {
    // Network level: connection refused, TLS, body read
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    // Server answered, but not with the status the caller waits for
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        data: Value,
    },

    #[error("Malformed token: {0}")]
    MalformedToken(String),

    // Mutation issued before any init/refresh recorded the resource scope
    #[error("No scope recorded for {0}")]
    MissingScope(&'static str),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Get error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "TRANSPORT_ERROR",
            ClientError::Timeout(_) => "TIMEOUT",
            ClientError::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            ClientError::MalformedToken(_) => "MALFORMED_TOKEN",
            ClientError::MissingScope(_) => "MISSING_SCOPE",
            ClientError::Storage(_) => "STORAGE_ERROR",
            ClientError::InvalidUrl(_) => "INVALID_URL",
            ClientError::Json(_) => "INVALID_JSON",
            ClientError::Io(_) => "IO_ERROR",
        }
    }

    /// HTTP status behind the error, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to JSON for CLI output
    pub fn to_json(&self) -> Value {
        match self {
            ClientError::UnexpectedStatus { status, url, data } => json!({
                "error": true,
                "message": self.to_string(),
                "code": self.error_code(),
                "status": status,
                "url": url,
                "data": data,
            }),
            _ => json!({
                "error": true,
                "message": self.to_string(),
                "code": self.error_code(),
            }),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<base64::DecodeError> for ClientError {
    fn from(err: base64::DecodeError) -> Self {
        ClientError::MalformedToken(format!("payload is not base64url: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_carries_body() {
        let err = ClientError::UnexpectedStatus {
            status: 403,
            url: "/api/user".to_string(),
            data: json!({"success": false, "message": "forbidden"}),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.error_code(), "UNEXPECTED_STATUS");
        assert_eq!(err.to_json()["data"]["message"], "forbidden");
    }

    #[test]
    fn timeout_has_no_status() {
        let err = ClientError::Timeout(Duration::from_secs(5));
        assert_eq!(err.status(), None);
        assert_eq!(err.to_json()["code"], "TIMEOUT");
    }
}
