// handlers/public/auth.rs - session endpoints handled locally

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::auth::clear_session_cookie;
use crate::state::AppState;

/// POST /api/auth/logout - clear the session cookie
///
/// Always succeeds and never calls upstream, whether or not a cookie was set.
pub async fn logout(State(state): State<AppState>) -> Response {
    let mut response = (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Logged out",
        })),
    )
        .into_response();

    response
        .headers_mut()
        .append(SET_COOKIE, clear_session_cookie(state.config.security.secure_cookies));

    tracing::debug!("Session cookie cleared");
    response
}
