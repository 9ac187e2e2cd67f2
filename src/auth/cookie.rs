use axum::http::{header::InvalidHeaderValue, HeaderValue};

pub const SESSION_COOKIE_NAME: &str = "token";

/// Seven days.
pub const SESSION_MAX_AGE_SECS: u64 = 7 * 24 * 60 * 60;

/// Build the `Set-Cookie` value that stores a freshly issued credential.
pub fn session_cookie(token: &str, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Build the `Set-Cookie` value that overwrites the credential with an already-expired one.
pub fn clear_session_cookie(secure: bool) -> HeaderValue {
    let mut cookie = format!(
        "{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie).unwrap_or_else(|_| HeaderValue::from_static("token=; Path=/; Max-Age=0"))
}
