// handlers/mod.rs - router assembly
//
// Two tiers sit behind the edge route guard:
// - public: endpoints the gateway answers itself (/, /health, logout)
// - proxy:  every table-driven upstream route (/api/*)

pub mod public;


use std::collections::{BTreeMap, HashMap};

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, RawQuery, State},
    http::{header, HeaderMap, HeaderValue, Method},
    middleware,
    response::IntoResponse,
    routing::{get, post, MethodRouter},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::error::ApiError;
use crate::middleware::route_guard_middleware;
use crate::proxy::{self, ROUTES};
use crate::state::AppState;

/// Build the full gateway router
pub fn router(state: AppState) -> Router {
    let body_limit = state.config.server.max_request_size_bytes;
    let cors = cors_layer(&state);

    Router::new()
        .route("/", get(public::root))
        .route("/health", get(public::health))
        .route("/api/auth/logout", post(public::logout))
        .merge(proxy_routes())
        .fallback(not_found)
        .layer(middleware::from_fn(route_guard_middleware))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}

/// Register every table entry, grouping methods that share an inbound path
fn proxy_routes() -> Router<AppState> {
    let mut by_path: BTreeMap<&'static str, MethodRouter<AppState>> = BTreeMap::new();

    for route in ROUTES {
        let handler = move |State(state): State<AppState>,
                            params: Option<Path<HashMap<String, String>>>,
                            RawQuery(query): RawQuery,
                            headers: HeaderMap,
                            body: Bytes| async move {
            let params = params.map(|Path(params)| params).unwrap_or_default();
            proxy::forward(&state, route, params, query, &headers, body).await
        };

        let methods = by_path.remove(route.inbound).unwrap_or_else(MethodRouter::new);
        by_path.insert(route.inbound, methods.on(route.method.filter(), handler));
    }

    by_path
        .into_iter()
        .fold(Router::new(), |router, (path, methods)| router.route(path, methods))
}

fn cors_layer(state: &AppState) -> CorsLayer {
    if state.config.is_development() {
        return CorsLayer::permissive();
    }

    let cors_origins = &state.config.security.cors_origins;
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
    let headers = [header::AUTHORIZATION, header::CONTENT_TYPE];

    // Credentialed CORS cannot answer with a wildcard origin.
    if cors_origins.iter().any(|origin| origin.trim() == "*") {
        tracing::warn!("CORS origin '*' configured: allowing any origin without credentials");
        return CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(methods)
        .allow_headers(headers)
}

async fn not_found() -> impl IntoResponse {
    ApiError::not_found("Not found")
}
