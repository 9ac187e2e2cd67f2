//! Outbound side of the gateway: the upstream request descriptor, the
//! transport trait and its `reqwest` implementation.

pub mod client;

use std::collections::HashMap;

use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::{Method, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::auth::Credential;

pub use client::HttpUpstream;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("upstream base URL cannot carry a path: {0}")]
    CannotBeABase(String),

    #[error("missing path parameter '{0}'")]
    MissingParam(String),
}

/// One outbound call, built fresh for every inbound request.
#[derive(Debug)]
pub struct UpstreamRequest {
    pub method: Method,
    pub url: Url,
    pub credential: Option<Credential>,
    pub body: Option<Value>,
}

/// Raw upstream reply; the body is decoded by the caller.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Decode the body as JSON. An empty body decodes to `null`.
    pub fn json(&self) -> Result<Value, UpstreamError> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamReply, UpstreamError>;
}

/// Join the upstream base, a mapped path template and the inbound query.
///
/// Template segments of the form `:name` are replaced by the matching path
/// parameter, percent-encoded as a single segment. The query string is
/// reattached verbatim.
pub fn build_url(
    base: &str,
    template: &str,
    params: &HashMap<String, String>,
    query: Option<&str>,
) -> Result<Url, UpstreamError> {
    let mut url = Url::parse(base)?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| UpstreamError::CannotBeABase(base.to_string()))?;
        segments.pop_if_empty();
        for segment in template.split('/').filter(|s| !s.is_empty()) {
            match segment.strip_prefix(':') {
                Some(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| UpstreamError::MissingParam(name.to_string()))?;
                    segments.push(value);
                }
                None => {
                    segments.push(segment);
                }
            }
        }
    }

    url.set_query(query.filter(|q| !q.is_empty()));
    Ok(url)
}
