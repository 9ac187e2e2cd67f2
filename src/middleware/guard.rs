use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::Credential;
use crate::guard::{self, GuardDecision};

/// Edge route guard: redirects unauthenticated requests for protected pages
/// to the matching login surface before any handler runs
pub async fn route_guard_middleware(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let has_credential = Credential::from_headers(request.headers()).is_some();

    match guard::decide(path, has_credential) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::Redirect { location } => {
            tracing::info!("Unauthenticated access to {}, redirecting to {}", path, location);
            Redirect::temporary(&location).into_response()
        }
    }
}
