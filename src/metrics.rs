use axum::{routing::get, Router};
use metrics::describe_counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

pub struct Metrics {
    pub handle: PrometheusHandle,
}

impl Metrics {
    /// Install the Prometheus recorder and describe the crate's counters.
    /// Only one recorder can exist per process.
    pub fn init() -> anyhow::Result<Self> {
        let handle = PrometheusBuilder::new().install_recorder()?;

        describe_counter!(
            "credibility_analyses_total",
            "Client analyses attempted against the remote analyzer"
        );
        describe_counter!(
            "credibility_fallback_total",
            "Client analyses answered by the local heuristic, by failure reason"
        );
        describe_counter!(
            "credibility_service_requests_total",
            "POST /api/analyze requests handled by the service, by outcome"
        );

        Ok(Self { handle })
    }

    /// Returns a router exposing `/metrics` with the Prometheus exposition format.
    pub fn router(&self) -> Router {
        let handle = self.handle.clone();
        Router::new().route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        )
    }
}
