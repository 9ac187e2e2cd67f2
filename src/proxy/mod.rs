//! Table-driven authenticated forwarding.
//!
//! Every proxied API route is one [`ProxyRoute`] entry. [`forward`] does the
//! same work for all of them: find the credential, enforce the route's
//! credential rule, build the upstream URL, send, and map the reply into the
//! `{success, data?, error?}` envelope callers expect.

pub mod routes;

use std::collections::HashMap;

use axum::{
    body::Bytes,
    http::{header::SET_COOKIE, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::MethodFilter,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::{session_cookie, Credential};
use crate::error::ApiError;
use crate::state::AppState;
use crate::upstream::{build_url, UpstreamError, UpstreamRequest};

pub use routes::ROUTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RouteMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RouteMethod {
    pub fn as_method(&self) -> Method {
        match self {
            RouteMethod::Get => Method::GET,
            RouteMethod::Post => Method::POST,
            RouteMethod::Put => Method::PUT,
            RouteMethod::Delete => Method::DELETE,
        }
    }

    pub fn filter(&self) -> MethodFilter {
        match self {
            RouteMethod::Get => MethodFilter::GET,
            RouteMethod::Post => MethodFilter::POST,
            RouteMethod::Put => MethodFilter::PUT,
            RouteMethod::Delete => MethodFilter::DELETE,
        }
    }

    /// Whether the inbound body is forwarded upstream
    pub fn carries_body(&self) -> bool {
        matches!(self, RouteMethod::Post | RouteMethod::Put)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteMethod::Get => "GET",
            RouteMethod::Post => "POST",
            RouteMethod::Put => "PUT",
            RouteMethod::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionEffect {
    None,
    /// Store the token from a successful reply in the session cookie.
    IssueCookie,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProxyRoute {
    pub name: &'static str,
    pub method: RouteMethod,
    pub inbound: &'static str,
    pub upstream: &'static str,
    pub requires_credential: bool,
    pub default_error: &'static str,
    pub preserve_status: bool,
    pub session: SessionEffect,
}

impl ProxyRoute {
    /// A credential-guarded route answering success with 200.
    pub const fn new(
        name: &'static str,
        method: RouteMethod,
        inbound: &'static str,
        upstream: &'static str,
        default_error: &'static str,
    ) -> Self {
        Self {
            name,
            method,
            inbound,
            upstream,
            requires_credential: true,
            default_error,
            preserve_status: false,
            session: SessionEffect::None,
        }
    }

    /// Forward even when no credential is present.
    pub const fn public(mut self) -> Self {
        self.requires_credential = false;
        self
    }

    /// Relay the upstream success status instead of 200.
    pub const fn preserve_status(mut self) -> Self {
        self.preserve_status = true;
        self
    }

    pub const fn issues_session(mut self) -> Self {
        self.session = SessionEffect::IssueCookie;
        self
    }
}

/// Forward one inbound request according to `route`.
pub async fn forward(
    state: &AppState,
    route: &ProxyRoute,
    params: HashMap<String, String>,
    query: Option<String>,
    headers: &HeaderMap,
    body: Bytes,
) -> Response {
    match try_forward(state, route, params, query, headers, body).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

async fn try_forward(
    state: &AppState,
    route: &ProxyRoute,
    params: HashMap<String, String>,
    query: Option<String>,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let credential = Credential::from_headers(headers);
    if route.requires_credential && credential.is_none() {
        tracing::debug!("{}: no credential, rejecting before upstream call", route.name);
        return Err(ApiError::missing_credential());
    }

    let body = if route.method.carries_body() {
        parse_inbound_body(&body)?
    } else {
        None
    };

    let url = build_url(&state.config.upstream.base_url, route.upstream, &params, query.as_deref())?;

    let reply = state
        .upstream
        .send(UpstreamRequest {
            method: route.method.as_method(),
            url,
            credential,
            body,
        })
        .await?;

    let payload = reply.json()?;
    let (status, payload) = map_reply(route, reply.status, payload)?;

    let issued = match route.session {
        SessionEffect::IssueCookie => issued_token(&payload).map(str::to_owned),
        SessionEffect::None => None,
    };

    let mut response = (status, Json(payload)).into_response();
    if let Some(token) = issued {
        match session_cookie(&token, state.config.security.secure_cookies) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
                tracing::info!("{}: session cookie issued", route.name);
            }
            Err(_) => tracing::warn!("{}: upstream token is not a valid cookie value", route.name),
        }
    }

    Ok(response)
}

/// Parse the inbound body as JSON. Blank bodies forward nothing.
fn parse_inbound_body(body: &Bytes) -> Result<Option<Value>, UpstreamError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_slice(body)?))
}

/// Translate an upstream status and decoded body into what the caller sees.
pub fn map_reply(route: &ProxyRoute, status: StatusCode, payload: Value) -> Result<(StatusCode, Value), ApiError> {
    if !status.is_success() {
        let message = upstream_message(&payload).unwrap_or(route.default_error);
        tracing::warn!("{}: upstream answered {} ({})", route.name, status.as_u16(), message);
        return Err(ApiError::upstream_rejected(status, message));
    }

    let payload = if payload.is_null() { json!({ "success": true }) } else { payload };
    let status = if route.preserve_status && status != StatusCode::NO_CONTENT {
        status
    } else {
        StatusCode::OK
    };

    Ok((status, payload))
}

/// The upstream's own error text: `error`, else `message`.
fn upstream_message(payload: &Value) -> Option<&str> {
    ["error", "message"]
        .iter()
        .filter_map(|key| payload.get(key).and_then(Value::as_str))
        .find(|msg| !msg.is_empty())
}

/// Token carried by a successful login reply, at the top level or under `data`.
fn issued_token(payload: &Value) -> Option<&str> {
    if payload.get("success").and_then(Value::as_bool) == Some(false) {
        return None;
    }
    payload
        .get("token")
        .or_else(|| payload.get("data").and_then(|data| data.get("token")))
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
}
