//! Bearer credential handling.
//!
//! The gateway never decodes or validates a credential. It only finds one
//! on the inbound request and hands it to the upstream service as-is.

pub mod cookie;

use axum::http::{header, HeaderMap};
use secrecy::{ExposeSecret, SecretString};

pub use cookie::{clear_session_cookie, session_cookie, SESSION_COOKIE_NAME, SESSION_MAX_AGE_SECS};

/// Opaque bearer token identifying a logged-in session.
#[derive(Debug, Clone)]
pub struct Credential(SecretString);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    /// Find a credential on the request.
    ///
    /// `Authorization: Bearer <token>` wins over the `token` cookie when both are present.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        bearer_from_headers(headers)
            .or_else(|| cookie_value(headers, SESSION_COOKIE_NAME))
            .map(Self::new)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Extract the token from an `Authorization: Bearer` header, if well-formed and non-empty
fn bearer_from_headers(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Look up a cookie by name across every `Cookie` header on the request
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, val) = pair.trim().split_once('=')?;
            (key.trim() == name).then(|| val.trim().to_string())
        })
        .find(|val| !val.is_empty())
}
