//! API error types.

use thiserror::Error;

/// Result type for backend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while issuing or decoding a backend request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failure from the underlying client.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus { status: u16, endpoint: String },

    /// The response body did not match the endpoint's expected shape.
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// JSON error building a request body.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Create an unexpected status error.
    pub fn unexpected_status(status: u16, endpoint: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Create a decode error for an endpoint.
    pub fn decode(endpoint: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Decode {
            endpoint: endpoint.into(),
            source,
        }
    }
}
