// src/analyze/client.rs
//! AnalysisClient: one remote attempt, local heuristic on any failure.
//!
//! The remote side is abstracted behind [`RemoteAnalyzer`] so the same client runs
//! against the real HTTP service ([`HttpAnalyzer`]) and against in-process doubles.

use std::time::Duration;

use async_trait::async_trait;
use metrics::counter;
use tracing::{debug, info, warn};

use super::heuristic::{self, RandomUnits, UnitSource};
use super::types::{AnalysisRequest, AnalyzeEnvelope, ScoreBundle};
use crate::config::ClientConfig;
use crate::logging::{content_id, truncate_for_log};

/// Why a remote attempt did not yield a usable bundle. All variants lead to the
/// same fallback; the distinction only feeds logs and metrics.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("unparseable response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("service reported status '{status}'")]
    Rejected { status: String },
    #[error("success response without results")]
    MissingResults,
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

impl RemoteError {
    /// Stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Transport(_) => "transport",
            RemoteError::Status { .. } => "status",
            RemoteError::Malformed(_) => "malformed",
            RemoteError::Rejected { .. } => "rejected",
            RemoteError::MissingResults => "missing_results",
            RemoteError::OutOfRange { .. } => "out_of_range",
        }
    }
}

/// Interpret a decoded envelope: only `status == "success"` with an in-range
/// bundle counts.
pub fn accept_envelope(env: AnalyzeEnvelope) -> Result<ScoreBundle, RemoteError> {
    if env.status != AnalyzeEnvelope::SUCCESS {
        return Err(RemoteError::Rejected { status: env.status });
    }
    let bundle = env.results.ok_or(RemoteError::MissingResults)?;
    if let Some((field, value)) = bundle.check_bounds() {
        return Err(RemoteError::OutOfRange { field, value });
    }
    Ok(bundle)
}

/// Remote scoring service.
#[async_trait]
pub trait RemoteAnalyzer: Send + Sync {
    /// Exactly one attempt; no retries.
    async fn request(&self, req: &AnalysisRequest) -> Result<ScoreBundle, RemoteError>;
    /// Name for diagnostics.
    fn name(&self) -> &'static str;
}

/// `POST <base_url><endpoint_path>` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnalyzer {
    pub fn new(cfg: &ClientConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(ms) = cfg.connect_timeout_ms {
            builder = builder.connect_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = cfg.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: cfg.endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteAnalyzer for HttpAnalyzer {
    async fn request(&self, req: &AnalysisRequest) -> Result<ScoreBundle, RemoteError> {
        debug!(endpoint = %self.endpoint, has_url = req.url.is_some(), "posting analysis request");
        let resp = self.http.post(&self.endpoint).json(req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(RemoteError::Status {
                code: status.as_u16(),
                body: truncate_for_log(&body, 160),
            });
        }

        let bytes = resp.bytes().await?;
        let env: AnalyzeEnvelope = serde_json::from_slice(&bytes)?;
        accept_envelope(env)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// One analysis result plus whether the local heuristic produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub bundle: ScoreBundle,
    pub used_fallback: bool,
}

impl AnalysisOutcome {
    pub fn into_parts(self) -> (ScoreBundle, bool) {
        (self.bundle, self.used_fallback)
    }
}

/// Stateless orchestrator around a [`RemoteAnalyzer`].
pub struct AnalysisClient<R = HttpAnalyzer> {
    remote: R,
}

impl AnalysisClient<HttpAnalyzer> {
    /// Client talking to the configured HTTP endpoint.
    pub fn from_config(cfg: &ClientConfig) -> anyhow::Result<Self> {
        Ok(Self::new(HttpAnalyzer::new(cfg)?))
    }
}

impl<R: RemoteAnalyzer> AnalysisClient<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Analyze `raw_text`; never fails. Callers validate non-empty input first.
    pub async fn analyze(&self, raw_text: &str) -> AnalysisOutcome {
        match self.try_remote(raw_text).await {
            Some(bundle) => AnalysisOutcome {
                bundle,
                used_fallback: false,
            },
            None => AnalysisOutcome {
                bundle: heuristic::score(raw_text, &mut RandomUnits(rand::rng())),
                used_fallback: true,
            },
        }
    }

    /// Like [`Self::analyze`] with the fallback's randomness supplied by the caller.
    pub async fn analyze_with<U>(&self, raw_text: &str, units: &mut U) -> AnalysisOutcome
    where
        U: UnitSource + Send,
    {
        match self.try_remote(raw_text).await {
            Some(bundle) => AnalysisOutcome {
                bundle,
                used_fallback: false,
            },
            None => AnalysisOutcome {
                bundle: heuristic::score(raw_text, units),
                used_fallback: true,
            },
        }
    }

    async fn try_remote(&self, raw_text: &str) -> Option<ScoreBundle> {
        let req = AnalysisRequest::from_text(raw_text);
        let id = content_id(raw_text);
        counter!("credibility_analyses_total").increment(1);

        match self.remote.request(&req).await {
            Ok(bundle) => {
                info!(
                    target: "credibility",
                    %id,
                    provider = self.remote.name(),
                    score = bundle.overall_score,
                    "remote analysis ok"
                );
                Some(bundle)
            }
            Err(err) => {
                counter!("credibility_fallback_total", "reason" => err.kind()).increment(1);
                warn!(
                    target: "credibility",
                    %id,
                    provider = self.remote.name(),
                    reason = err.kind(),
                    error = %err,
                    "remote analysis failed; using local heuristic"
                );
                None
            }
        }
    }
}
