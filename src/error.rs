// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::upstream::UpstreamError;

pub const MISSING_CREDENTIAL_MESSAGE: &str = "No authentication token found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error returned to gateway callers, always rendered as `{success:false, error}`
#[derive(Debug)]
pub enum ApiError {
    // 401 Unauthorized, raised before any upstream call
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // Non-2xx reply from upstream, relayed with its own status
    UpstreamRejected { status: StatusCode, message: String },

    // 500 Internal Server Error (transport or parse failures)
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UpstreamRejected { status, .. } => *status,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::UpstreamRejected { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.message(),
        })
    }
}

impl ApiError {
    pub fn missing_credential() -> Self {
        ApiError::Unauthorized(MISSING_CREDENTIAL_MESSAGE.to_string())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn upstream_rejected(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::UpstreamRejected {
            status,
            message: message.into(),
        }
    }

    pub fn internal_server_error() -> Self {
        ApiError::InternalServerError(INTERNAL_ERROR_MESSAGE.to_string())
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        // Never expose transport details to callers
        tracing::error!("Proxy call failed: {}", err);
        ApiError::internal_server_error()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
