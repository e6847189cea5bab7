//! HTTP-level tests for the tokenization routes.
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`; no
//! listener is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use thai_lexicon_core::{MaximalMatchSegmenter, Segmenter};
use thai_lexicon_server::build_router;
use tower::ServiceExt;

// ============================================================================
// TEST INFRASTRUCTURE
// ============================================================================

fn app() -> axum::Router {
    let segmenter: Arc<dyn Segmenter> = Arc::new(MaximalMatchSegmenter::new());
    build_router(segmenter)
}

async fn post_json(body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/tokenize")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn tokens_of(body: &Value) -> Vec<String> {
    body["tokens"]
        .as_array()
        .expect("tokens array")
        .iter()
        .map(|t| t.as_str().expect("string token").to_string())
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[tokio::test]
async fn tokenize_thai_sentence() {
    let (status, body) = post_json(json!({ "text": "ฉันรักภาษาไทย" })).await;
    assert_eq!(status, StatusCode::OK);

    let tokens = tokens_of(&body);
    assert_eq!(tokens, vec!["ฉัน", "รัก", "ภาษาไทย"]);
    assert_eq!(tokens.concat(), "ฉันรักภาษาไทย");
}

#[tokio::test]
async fn tokenize_drops_whitespace() {
    let (status, body) = post_json(json!({ "text": "สวัสดี  ครับ\n" })).await;
    assert_eq!(status, StatusCode::OK);

    let tokens = tokens_of(&body);
    assert!(!tokens.is_empty());
    assert!(tokens.iter().all(|t| !t.trim().is_empty()));
    assert_eq!(tokens.concat(), "สวัสดีครับ");
}

#[tokio::test]
async fn tokenize_empty_text() {
    let (status, body) = post_json(json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tokens": [] }));
}

#[tokio::test]
async fn tokenize_missing_text() {
    let (status, body) = post_json(json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tokens": [] }));
}

#[tokio::test]
async fn tokenize_null_text() {
    let (status, body) = post_json(json!({ "text": null })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "tokens": [] }));
}

#[tokio::test]
async fn tokenize_rejects_non_json_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/tokenize")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert!(resp.status().is_client_error());
}

#[tokio::test]
async fn health_reports_ok() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}
