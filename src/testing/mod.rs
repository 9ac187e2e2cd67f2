use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::upstream::{Upstream, UpstreamError, UpstreamReply, UpstreamRequest};

pub const STUB_BASE_URL: &str = "http://upstream.test/api";

/// What the stub saw for one forwarded call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

/// In-process upstream that answers from a scripted table and records every call
#[derive(Default)]
pub struct StubUpstream {
    replies: Mutex<HashMap<String, UpstreamReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the reply for an upstream path (without the base path)
    pub fn reply(self, path: &str, status: StatusCode, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), UpstreamReply::new(status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Upstream for StubUpstream {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamReply, UpstreamError> {
        let path = request
            .url
            .path()
            .strip_prefix("/api")
            .unwrap_or(request.url.path())
            .to_string();

        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method.clone(),
            path: path.clone(),
            query: request.url.query().map(str::to_owned),
            bearer: request.credential.as_ref().map(|c| c.expose().to_string()),
            body: request.body.clone(),
        });

        let reply = self
            .replies
            .lock()
            .unwrap()
            .get(&path)
            .cloned()
            .unwrap_or_else(|| UpstreamReply::new(StatusCode::OK, r#"{"success":true,"data":[]}"#));
        Ok(reply)
    }
}

/// Gateway state wired to a stub upstream
pub fn stub_state(stub: Arc<StubUpstream>) -> AppState {
    AppState::new(AppConfig::development().with_upstream(STUB_BASE_URL), stub)
}
