use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the dashboard API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("API Error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    /// Transport failure or undecodable response body
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request body could not be serialized
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }

    /// HTTP status code, if the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Encode(_) => None,
        }
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
