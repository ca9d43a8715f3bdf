// tests/api_http.rs
//
// HTTP-level tests for the service Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /api/analyze (success envelope + validation errors)

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::json;
use serde_json::Value as Json;
use tower::ServiceExt as _; // for `oneshot`

use credibility_scorer::analyze::tiers::reliability_label;
use credibility_scorer::config::ServiceConfig;
use credibility_scorer::{app, router, AppConfig, ScoreBundle};

const BODY_LIMIT: usize = 1024 * 1024;

fn test_router() -> Router {
    router(ServiceConfig::default())
}

async fn post_analyze(app: Router, content_type: &str, body: String) -> (StatusCode, Json) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header("content-type", content_type)
        .body(Body::from(body))
        .expect("build POST /api/analyze");

    let resp = app.oneshot(req).await.expect("oneshot /api/analyze");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body");
    let v: Json = serde_json::from_slice(&bytes).expect("json body");
    (status, v)
}

#[tokio::test]
async fn health_returns_healthy() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let resp = test_router().oneshot(req).await.expect("oneshot /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT).await.unwrap();
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(v, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn analyze_returns_success_envelope() {
    let payload = json!({
        "content": "According to Reuters, the central bank held rates at 5.25% on March 20, 2024.",
        "url": "https://www.reuters.com/markets/rates"
    });
    let (status, v) = post_analyze(test_router(), "application/json", payload.to_string()).await;

    assert_eq!(status, StatusCode::OK, "body: {v}");
    assert_eq!(v["status"], "success");

    let bundle: ScoreBundle =
        serde_json::from_value(v["results"].clone()).expect("results match ScoreBundle");
    assert!(bundle.check_bounds().is_none());
    assert_eq!(bundle.source_score, 85.0);
    assert_eq!(bundle.reliability_label, reliability_label(bundle.overall_score));
}

#[tokio::test]
async fn analyze_is_deterministic() {
    let payload = json!({ "content": "SHOCKING miracle cure REVEALED! Doctors hate this one weird trick!!!" });
    let (_, a) = post_analyze(test_router(), "application/json", payload.to_string()).await;
    let (_, b) = post_analyze(test_router(), "application/json", payload.to_string()).await;
    assert_eq!(a, b);
    assert!(a["results"]["languageScore"].as_f64().unwrap() < 40.0);
}

#[tokio::test]
async fn validation_errors_are_400_with_error_status() {
    let cases = [
        ("text/plain", "content=hello".to_string(), "Request must be JSON format"),
        ("application/json", "{}".to_string(), "No data provided"),
        ("application/json", json!({ "url": null }).to_string(), "No valid content"),
        ("application/json", json!({ "content": 42 }).to_string(), "No valid content"),
        ("application/json", json!({ "content": "" }).to_string(), "No valid content"),
        ("application/json", json!({ "content": "   too short   " }).to_string(), "Content too short"),
    ];

    for (ct, body, expected) in cases {
        let (status, v) = post_analyze(test_router(), ct, body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(v["status"], "error");
        let msg = v["error"].as_str().unwrap_or_default();
        assert!(msg.starts_with(expected), "body {body}: got {msg:?}");
        assert!(v.get("results").is_none());
    }
}

#[tokio::test]
async fn min_content_chars_is_configurable() {
    let cfg = AppConfig::from_toml_str("[service]\nmin_content_chars = 3\n").unwrap();
    let (status, v) = post_analyze(
        app(&cfg),
        "application/json",
        json!({ "content": "Fed" }).to_string(),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body: {v}");
}
