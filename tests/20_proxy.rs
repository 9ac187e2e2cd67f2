mod common;

use anyhow::Result;
use reqwest::{header, Method, StatusCode};
use serde_json::{json, Value};

#[tokio::test]
async fn bearer_header_takes_precedence_over_cookie() -> Result<()> {
    let gateway = common::spawn(&[]).await?;
    let client = common::client()?;

    let res = client
        .get(gateway.url("/api/enrollments"))
        .header(header::AUTHORIZATION, "Bearer header-token")
        .header(header::COOKIE, "token=cookie-token")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let calls = gateway.upstream.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].authorization.as_deref(), Some("Bearer header-token"));
    Ok(())
}

#[tokio::test]
async fn missing_credential_is_rejected_before_upstream() -> Result<()> {
    let gateway = common::spawn(&[]).await?;
    let client = common::client()?;

    let res = client
        .post(gateway.url("/api/checkout"))
        .json(&json!({ "items": [1, 2] }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": false, "error": "No authentication token found" }));
    assert_eq!(gateway.upstream.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn upstream_error_status_and_message_are_relayed() -> Result<()> {
    let gateway = common::spawn(&[("/courses/99", 404, json!({ "error": "not found" }))]).await?;
    let client = common::client()?;

    let res = client.get(gateway.url("/api/courses/99")).send().await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": false, "error": "not found" }));
    Ok(())
}

#[tokio::test]
async fn upstream_error_without_message_uses_route_default() -> Result<()> {
    let gateway = common::spawn(&[("/cart", 503, json!({}))]).await?;
    let client = common::client()?;

    let res = client
        .get(gateway.url("/api/cart"))
        .bearer_auth("abc")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": false, "error": "Failed to fetch cart" }));
    Ok(())
}

#[tokio::test]
async fn query_path_params_and_body_reach_upstream() -> Result<()> {
    let gateway = common::spawn(&[(
        "/enrollments/5",
        200,
        json!({ "success": true, "data": { "id": 5, "progress": 80 } }),
    )])
    .await?;
    let client = common::client()?;

    let res = client
        .request(Method::PUT, gateway.url("/api/enrollments/5?notify=false"))
        .bearer_auth("abc")
        .json(&json!({ "progress": 80 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": true, "data": { "id": 5, "progress": 80 } }));

    let calls = gateway.upstream.calls();
    assert_eq!(calls[0].method, Method::PUT);
    assert_eq!(calls[0].path, "/enrollments/5");
    assert_eq!(calls[0].query.as_deref(), Some("notify=false"));
    assert_eq!(calls[0].body, Some(json!({ "progress": 80 })));
    Ok(())
}

#[tokio::test]
async fn listing_filters_are_relayed_verbatim() -> Result<()> {
    let gateway = common::spawn(&[]).await?;
    let client = common::client()?;

    client
        .get(gateway.url("/api/courses?page=2&size=12&keyword=rust&sortBy=price"))
        .send()
        .await?;

    let calls = gateway.upstream.calls();
    assert_eq!(calls[0].path, "/courses");
    assert_eq!(calls[0].query.as_deref(), Some("page=2&size=12&keyword=rust&sortBy=price"));
    assert!(calls[0].authorization.is_none());
    Ok(())
}

#[tokio::test]
async fn create_routes_keep_upstream_status() -> Result<()> {
    let gateway = common::spawn(&[("/cart", 201, json!({ "success": true, "data": { "id": 1 } }))]).await?;
    let client = common::client()?;

    let res = client
        .post(gateway.url("/api/cart"))
        .bearer_auth("abc")
        .json(&json!({ "courseId": 7 }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::CREATED);
    Ok(())
}

#[tokio::test]
async fn unreachable_upstream_is_a_generic_500() -> Result<()> {
    // Nothing listens on this port
    let port = portpicker::pick_unused_port().expect("free port");
    let gateway = common::spawn_gateway_at(&format!("http://127.0.0.1:{port}/api")).await?;
    let client = common::client()?;

    let res = client
        .get(format!("{gateway}/api/payments/history"))
        .bearer_auth("abc")
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({ "success": false, "error": "Internal server error" }));
    Ok(())
}
