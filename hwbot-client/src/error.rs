//! Error types for the homework status client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when fetching homework statuses
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection, DNS, timeout)
    #[error("request to status endpoint failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-200 status code
    #[error("status endpoint returned HTTP {status}")]
    BadStatus {
        /// HTTP status code of the response
        status: u16,
    },

    /// The 200 response body was not valid JSON
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::BadStatus { status } if *status >= 500)
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::BadStatus { status } if *status >= 400 && *status < 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_status_classification() {
        assert!(ClientError::BadStatus { status: 503 }.is_server_error());
        assert!(!ClientError::BadStatus { status: 503 }.is_client_error());
        assert!(ClientError::BadStatus { status: 404 }.is_client_error());
        assert!(!ClientError::BadStatus { status: 404 }.is_server_error());
    }

    #[test]
    fn test_decode_is_neither_client_nor_server_error() {
        let err = ClientError::Decode("unexpected end of input".to_string());
        assert!(!err.is_client_error());
        assert!(!err.is_server_error());
    }
}
