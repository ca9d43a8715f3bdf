// src/analyze/types.rs
//! Wire and result types shared by the client, the local heuristic, and the service.

use serde::{Deserialize, Serialize};

use super::url::extract_url;

/// Payload sent to `POST /api/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub content: String,
    pub url: Option<String>,
}

impl AnalysisRequest {
    /// Build the payload for `text`, picking up the first http(s) link it contains.
    pub fn from_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            url: extract_url(text),
        }
    }
}

/// One overall score + label and three sub-metric score/text pairs.
///
/// Produced either by the remote analyzer or by the local heuristic; consumers
/// never need to know which.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
    pub overall_score: f64,
    pub reliability_label: String,
    pub language_score: f64,
    pub fact_score: f64,
    pub source_score: f64,
    pub language_analysis: String,
    pub fact_analysis: String,
    pub source_analysis: String,
}

impl ScoreBundle {
    /// Returns the first numeric field that is NaN/infinite or outside [0, 100].
    pub fn check_bounds(&self) -> Option<(&'static str, f64)> {
        [
            ("overallScore", self.overall_score),
            ("languageScore", self.language_score),
            ("factScore", self.fact_score),
            ("sourceScore", self.source_score),
        ]
        .into_iter()
        .find(|(_, v)| !v.is_finite() || !(0.0..=100.0).contains(v))
    }
}

/// Response envelope of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeEnvelope {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<ScoreBundle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeEnvelope {
    pub const SUCCESS: &'static str = "success";
    pub const ERROR: &'static str = "error";

    pub fn success(results: ScoreBundle) -> Self {
        Self {
            status: Self::SUCCESS.to_string(),
            results: Some(results),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Self::ERROR.to_string(),
            results: None,
            error: Some(message.into()),
        }
    }
}
