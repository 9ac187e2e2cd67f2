//! Path-level access rules applied before any page or API handler runs.
//!
//! Classification is a pure function of the path. The guard only looks at
//! whether a credential is present, never at what it contains; expired or
//! forged tokens are rejected by the upstream service on the next proxied call.

use url::form_urlencoded;

pub const LOGIN_PATH: &str = "/login";
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Pages that must stay reachable without a session.
pub const AUTH_PAGE_PREFIXES: &[&str] = &[
    "/login",
    "/register",
    "/admin/login",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
];

/// User dashboard sections.
pub const USER_PREFIXES: &[&str] = &[
    "/dashboard",
    "/my-courses",
    "/profile",
    "/cart",
    "/checkout",
    "/payments",
    "/onboarding",
    "/settings",
];

/// Admin dashboard sections.
pub const ADMIN_PREFIXES: &[&str] = &["/admin"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    AuthPage,
    ProtectedUser,
    ProtectedAdmin,
    Public,
}

impl RouteClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteClass::AuthPage => "auth-page",
            RouteClass::ProtectedUser => "protected-user",
            RouteClass::ProtectedAdmin => "protected-admin",
            RouteClass::Public => "public",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { location: String },
}

/// True when `path` is an auth page itself or a sub-path of it.
fn is_auth_page(path: &str) -> bool {
    AUTH_PAGE_PREFIXES.iter().any(|prefix| match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    })
}

fn starts_with_any(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Classify a request path. Auth pages are checked first so `/admin/login`
/// is never treated as part of the admin area. Protected prefixes match any
/// continuation (`/admin-panel`, `/cart2`); auth pages only match whole
/// segments so `/admin/login-x` stays inside the admin area.
pub fn classify(path: &str) -> RouteClass {
    if is_auth_page(path) {
        RouteClass::AuthPage
    } else if starts_with_any(path, ADMIN_PREFIXES) {
        RouteClass::ProtectedAdmin
    } else if starts_with_any(path, USER_PREFIXES) {
        RouteClass::ProtectedUser
    } else {
        RouteClass::Public
    }
}

/// Decide whether a request may proceed.
pub fn decide(path: &str, has_credential: bool) -> GuardDecision {
    let login = match classify(path) {
        RouteClass::ProtectedAdmin if !has_credential => ADMIN_LOGIN_PATH,
        RouteClass::ProtectedUser if !has_credential => LOGIN_PATH,
        _ => return GuardDecision::Allow,
    };

    GuardDecision::Redirect {
        location: login_redirect(login, path),
    }
}

/// `<login>?redirect=<original path>` with the path form-encoded.
pub fn login_redirect(login: &str, original: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("redirect", original)
        .finish();
    format!("{login}?{query}")
}
