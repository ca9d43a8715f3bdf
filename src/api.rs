// src/api.rs
//! HTTP surface: the `/api/analyze` service, health, and static UI files.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use metrics::counter;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

use crate::analyze::types::AnalyzeEnvelope;
use crate::config::ServiceConfig;
use crate::logging::content_id;
use crate::service;

#[derive(Clone)]
pub struct ApiState {
    cfg: Arc<ServiceConfig>,
}

impl ApiState {
    pub fn new(cfg: ServiceConfig) -> Self {
        Self { cfg: Arc::new(cfg) }
    }
}

pub fn router(cfg: ServiceConfig) -> Router {
    let static_dir = ServeDir::new(&cfg.static_dir);
    let state = ApiState::new(cfg);

    Router::new()
        .route("/health", get(health))
        .route("/api/analyze", post(analyze))
        .fallback_service(static_dir)
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

type ApiReply = (StatusCode, Json<AnalyzeEnvelope>);

fn bad_request(reason: &'static str, message: impl Into<String>) -> ApiReply {
    counter!("credibility_service_requests_total", "outcome" => reason).increment(1);
    (
        StatusCode::BAD_REQUEST,
        Json(AnalyzeEnvelope::error(message)),
    )
}

async fn analyze(
    State(state): State<ApiState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiReply {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => {
            warn!(target: "credibility", error = %rejection, "rejecting non-JSON analyze request");
            return bad_request("not_json", "Request must be JSON format");
        }
    };

    if body.as_object().map_or(true, |o| o.is_empty()) {
        return bad_request("no_data", "No data provided");
    }

    let content = match body.get("content").and_then(Value::as_str) {
        Some(c) if !c.is_empty() => c.trim(),
        _ => return bad_request("no_content", "No valid content provided for analysis"),
    };

    let min = state.cfg.min_content_chars;
    if content.chars().count() < min {
        return bad_request(
            "too_short",
            format!("Content too short for meaningful analysis (minimum {min} characters required)"),
        );
    }

    let url = body.get("url").and_then(Value::as_str);
    let bundle = service::analyze_content(content, url);

    counter!("credibility_service_requests_total", "outcome" => "success").increment(1);
    info!(
        target: "credibility",
        id = %content_id(content),
        has_url = url.is_some(),
        score = bundle.overall_score,
        label = %bundle.reliability_label,
        "service analysis"
    );

    (StatusCode::OK, Json(AnalyzeEnvelope::success(bundle)))
}
