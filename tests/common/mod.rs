#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use course_gateway::{config::AppConfig, handlers, state::AppState, upstream::HttpUpstream};
use serde_json::{json, Value};

/// One request as seen by the stub upstream
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct StubState {
    replies: Arc<HashMap<String, (u16, Value)>>,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

/// Upstream API stand-in listening on a picked port
pub struct StubUpstream {
    pub base_url: String,
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl StubUpstream {
    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

pub struct TestGateway {
    pub base_url: String,
    pub upstream: StubUpstream,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn stub_handler(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().strip_prefix("/api").unwrap_or(uri.path()).to_string();

    state.calls.lock().unwrap().push(Recorded {
        method,
        path: path.clone(),
        query: uri.query().map(str::to_owned),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned),
        body: serde_json::from_slice(&body).ok(),
    });

    let (status, reply) = state
        .replies
        .get(&path)
        .cloned()
        .unwrap_or((200, json!({ "success": true, "data": [] })));

    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(reply)).into_response()
}

async fn serve(app: Router) -> Result<String> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .with_context(|| format!("failed to bind port {}", port))?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://127.0.0.1:{}", port))
}

/// Start a stub upstream answering the scripted `(path, status, body)` replies
pub async fn spawn_upstream(replies: &[(&str, u16, Value)]) -> Result<StubUpstream> {
    let state = StubState {
        replies: Arc::new(
            replies
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.clone())))
                .collect(),
        ),
        calls: Arc::new(Mutex::new(Vec::new())),
    };
    let calls = state.calls.clone();

    let app = Router::new().fallback(stub_handler).with_state(state);
    let root = serve(app).await?;

    Ok(StubUpstream {
        base_url: format!("{}/api", root),
        calls,
    })
}

/// Start the gateway against `upstream_base`
pub async fn spawn_gateway_at(upstream_base: &str) -> Result<String> {
    let config = AppConfig::development().with_upstream(upstream_base);
    let upstream = HttpUpstream::new()?;
    serve(handlers::router(AppState::new(config, Arc::new(upstream)))).await
}

/// Start a stub upstream and a gateway wired to it
pub async fn spawn(replies: &[(&str, u16, Value)]) -> Result<TestGateway> {
    let upstream = spawn_upstream(replies).await?;
    let base_url = spawn_gateway_at(&upstream.base_url).await?;
    Ok(TestGateway { base_url, upstream })
}

/// Client that reports redirects instead of following them
pub fn client() -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}
