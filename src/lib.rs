// src/lib.rs
// Public library surface for the binaries and integration tests.

pub mod analyze;
pub mod api;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod service;
pub mod session;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{AnalysisClient, AnalysisOutcome, ScoreBundle};
pub use crate::api::router;
pub use crate::config::AppConfig;
pub use crate::session::{AnalysisSession, SubmitError, FALLBACK_NOTICE};

use axum::Router;

/// Router for the service described by `cfg` (no metrics endpoint).
pub fn app(cfg: &AppConfig) -> Router {
    api::router(cfg.service.clone())
}
