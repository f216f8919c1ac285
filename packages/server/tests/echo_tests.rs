//! Echo API behavior.

mod common;

use axum::http::StatusCode;
use chrono::DateTime;
use common::*;
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn post_echoes_body(ctx: &TestHarness) {
    let (status, body) = ctx
        .post("/api/echo", Some("application/json"), r#"{"test":"hello"}"#)
        .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["message"], "Echo API endpoint working!");
    assert_eq!(json["data"], json!({"test": "hello"}));
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
    assert!(timestamp.ends_with('Z'));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn post_ignores_content_type(ctx: &TestHarness) {
    let (status, body) = ctx.post("/api/echo", None, r#"[1, {"a": null}]"#).await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"], json!([1, {"a": null}]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn malformed_json_is_a_client_error(ctx: &TestHarness) {
    let (status, body) = ctx
        .post("/api/echo", Some("application/json"), "{\"test\": ")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, json!({"error": "Invalid JSON in request body"}));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn get_reports_running(ctx: &TestHarness) {
    let (status, json) = ctx.get_json("/api/echo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Echo API is running! Send a POST request with JSON data."
    );
    assert!(json["timestamp"].is_string());
    assert!(json.get("data").is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn echo_does_not_touch_post_source(ctx: &TestHarness) {
    ctx.post("/api/echo", None, "{}").await;
    ctx.get("/api/echo").await;

    assert_eq!(ctx.source.calls(), 0);
}
