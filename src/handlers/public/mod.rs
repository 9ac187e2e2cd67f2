// handlers/public/mod.rs - endpoints served by the gateway itself
//
// These never reach the upstream service.

pub mod auth;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::proxy::ROUTES;
use crate::state::AppState;

pub use auth::logout;

/// GET / - service descriptor with the proxied route table
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    let routes: Vec<Value> = ROUTES
        .iter()
        .map(|route| {
            json!({
                "name": route.name,
                "method": route.method.as_str(),
                "path": route.inbound,
                "credential": route.requires_credential,
            })
        })
        .collect();

    Json(json!({
        "success": true,
        "data": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "upstream": state.config.upstream.base_url,
            "routes": routes,
        }
    }))
}

/// GET /health - liveness only; the upstream is not probed
pub async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
