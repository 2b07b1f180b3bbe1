//! API error type and its JSON response mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_types::ValidationError;
use thiserror::Error;

/// Errors surfaced by HTTP handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed path parameter or missing required value
    #[error("{0}")]
    BadRequest(&'static str),

    /// Request body failed to parse or validate
    #[error("{message}: {details}")]
    InvalidBody {
        message: &'static str,
        details: String,
    },

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_body(message: &'static str, details: impl ToString) -> Self {
        Self::InvalidBody {
            message,
            details: details.to_string(),
        }
    }

    pub fn validation(message: &'static str, err: ValidationError) -> Self {
        Self::invalid_body(message, err)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::BadRequest(message) | Self::NotFound(message) => json!({ "error": message }),
            Self::InvalidBody { message, details } => json!({
                "error": message,
                "details": details,
            }),
            Self::Internal(detail) => {
                // Details stay in the log
                tracing::error!("Request failed: {}", detail);
                json!({ "error": "Internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Parse a numeric path id, mapping anything else to a 400 with `message`
pub fn parse_id(raw: &str, message: &'static str) -> ApiResult<i32> {
    raw.trim().parse().map_err(|_| ApiError::BadRequest(message))
}

/// Reject empty or whitespace session ids
pub fn require_session_id(raw: &str) -> ApiResult<&str> {
    if raw.trim().is_empty() {
        return Err(ApiError::BadRequest("Session ID is required"));
    }
    Ok(raw)
}
