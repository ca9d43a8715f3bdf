//! Credibility Scorer — Binary Entrypoint
//! Boots the Axum HTTP server: `/api/analyze`, `/health`, `/metrics`, and the
//! static UI directory.

use credibility_scorer::{api, logging, metrics::Metrics, AppConfig};
use shuttle_axum::ShuttleAxum;
use tracing::warn;

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    // Initialize dev tracing early (no-op in production).
    logging::init_dev_tracing();

    let cfg = AppConfig::load()?;

    let mut router = api::router(cfg.service.clone());
    match Metrics::init() {
        Ok(m) => router = router.merge(m.router()),
        Err(e) => warn!(error = %e, "metrics recorder not installed; /metrics disabled"),
    }

    Ok(router.into())
}
