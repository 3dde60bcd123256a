//! API error handling
//!
//! Upstream failures are caught at the fetch boundary and arrive here as
//! plain errors; this module decides the externally visible status. The
//! response body is always `{"error": message}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is absent or empty.
    #[error("{0}")]
    MissingInput(String),

    /// A weather fetch failed; nothing was persisted.
    #[error("Failed to fetch weather data")]
    UpstreamFailed,

    /// Re-fetching conditions for the replacement location failed.
    #[error("Invalid new location")]
    InvalidLocation,

    /// CSV export requested with no stored records.
    #[error("No data to export")]
    EmptyStore,

    /// Store failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MissingInput(_) | Self::InvalidLocation | Self::EmptyStore => {
                StatusCode::BAD_REQUEST
            }
            Self::UpstreamFailed | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
