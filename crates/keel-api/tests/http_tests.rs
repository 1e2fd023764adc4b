//! Endpoint tests against the in-process router.
//!
//! `tower::ServiceExt::oneshot` drives the router without opening a socket,
//! so these cover the full request path: routing, extraction, use case,
//! response shaping.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use keel_api::http;
use keel_api::state::AppState;

fn app() -> axum::Router {
    http::router(Arc::new(AppState::new()))
}

async fn get(path: &str) -> axum::response::Response {
    app()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

#[tokio::test]
async fn test_root_returns_hello_world() {
    let response = get("/").await;

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    assert_eq!(body_bytes(response).await, b"Hello World!");
}

#[tokio::test]
async fn test_root_is_deterministic() {
    let first = body_bytes(get("/").await).await;
    let second = body_bytes(get("/").await).await;
    let third = body_bytes(get("/").await).await;

    assert_eq!(first, second);
    assert_eq!(second, third);
}

#[tokio::test]
async fn test_healthz_reports_ok() {
    let response = get("/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("application/json"));

    let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert!(value["uptime_seconds"].is_u64());
    assert!(value["started_at"].is_string());
}

#[tokio::test]
async fn test_unknown_path_gets_json_envelope() {
    let response = get("/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let value: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(value["error"]["code"], 404);
    assert!(value["error"]["message"]
        .as_str()
        .unwrap()
        .contains("/nope"));
}

#[tokio::test]
async fn test_wrong_method_is_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
