// Upstream client implementation
// Single pooled reqwest client shared by every handler

use async_trait::async_trait;
use reqwest::{header, Client};

use super::{Upstream, UpstreamError, UpstreamReply, UpstreamRequest};

pub struct HttpUpstream {
    http_client: Client,
}

impl HttpUpstream {
    /// Build the client. No request timeout is set; calls run until the
    /// upstream answers or the transport fails.
    pub fn new() -> Result<Self, UpstreamError> {
        let http_client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamReply, UpstreamError> {
        let UpstreamRequest {
            method,
            url,
            credential,
            body,
        } = request;

        tracing::debug!("Forwarding {} {}", method, url.path());

        let mut builder = self
            .http_client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json");

        if let Some(credential) = &credential {
            builder = builder.bearer_auth(credential.expose());
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamReply { status, body })
    }
}
