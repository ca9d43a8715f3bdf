// src/service/mod.rs
//! Server-side analyzer behind `POST /api/analyze`.
//!
//! Deterministic: the same content and URL always produce the same bundle.
//! Order:
//! 1) language patterns
//! 2) source credibility (URL domain, then attribution density)
//! 3) fact consistency
//! 4) weighted overall score + reliability label

pub mod facts;
pub mod language;
pub mod source;
pub mod text;

use crate::analyze::tiers::reliability_label;
use crate::analyze::types::ScoreBundle;

/// One sub-metric result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub score: f64,
    pub analysis: &'static str,
}

impl Assessment {
    pub const fn new(score: f64, analysis: &'static str) -> Self {
        Self { score, analysis }
    }
}

pub const LANGUAGE_WEIGHT: f64 = 0.25;
pub const SOURCE_WEIGHT: f64 = 0.40;
pub const FACT_WEIGHT: f64 = 0.35;

/// Weighted overall score rounded to two decimals.
pub fn overall_score(language: f64, source: f64, fact: f64) -> f64 {
    let weighted = language * LANGUAGE_WEIGHT + source * SOURCE_WEIGHT + fact * FACT_WEIGHT;
    (weighted * 100.0).round() / 100.0
}

/// Full analysis of already-validated content.
pub fn analyze_content(content: &str, url: Option<&str>) -> ScoreBundle {
    let lang = language::analyze(content);
    let src = source::analyze(content, url);
    let fact = facts::analyze(content);
    let overall = overall_score(lang.score, src.score, fact.score);

    ScoreBundle {
        overall_score: overall,
        reliability_label: reliability_label(overall).to_string(),
        language_score: lang.score,
        fact_score: fact.score,
        source_score: src.score,
        language_analysis: lang.analysis.to_string(),
        fact_analysis: fact.analysis.to_string(),
        source_analysis: src.analysis.to_string(),
    }
}
