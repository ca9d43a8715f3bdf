// src/analyze/tiers.rs
//! Threshold tables mapping a 0..=100 score to a label.
//!
//! Every score → text decision (reliability label, per-metric tier text, display
//! tier) goes through [`TierTable`], so the bounds live in exactly one place.

use serde::Serialize;

/// Ordered `(upper_bound, label)` bands evaluated by first match, plus the label
/// for everything at or above the last bound.
#[derive(Debug, Clone, Copy)]
pub struct TierTable<T: Copy + 'static, const N: usize> {
    bands: [(f64, T); N],
    otherwise: T,
}

impl<T: Copy + 'static, const N: usize> TierTable<T, N> {
    pub const fn new(bands: [(f64, T); N], otherwise: T) -> Self {
        Self { bands, otherwise }
    }

    /// First band whose bound is strictly above `score`. NaN lands in `otherwise`.
    pub fn classify(&self, score: f64) -> T {
        self.bands
            .iter()
            .find(|(below, _)| score < *below)
            .map(|(_, label)| *label)
            .unwrap_or(self.otherwise)
    }
}

/// Bounds shared by the three sub-metric tables.
pub const METRIC_LOW_BELOW: f64 = 40.0;
pub const METRIC_MID_BELOW: f64 = 70.0;

pub type MetricTiers = TierTable<&'static str, 2>;

const fn metric_tiers(low: &'static str, mid: &'static str, high: &'static str) -> MetricTiers {
    TierTable::new([(METRIC_LOW_BELOW, low), (METRIC_MID_BELOW, mid)], high)
}

pub const RELIABILITY: TierTable<&'static str, 4> = TierTable::new(
    [
        (30.0, "Likely Fake News"),
        (50.0, "Questionable Content"),
        (70.0, "Partially Reliable"),
        (85.0, "Mostly Reliable"),
    ],
    "Highly Reliable",
);

// Short wording used by the local heuristic.
pub const LANGUAGE: MetricTiers = metric_tiers(
    "Highly emotional language detected.",
    "Some emotional language present.",
    "Neutral language detected.",
);
pub const FACT: MetricTiers = metric_tiers(
    "Multiple unverified claims detected.",
    "Some claims require verification.",
    "Most claims appear accurate.",
);
pub const SOURCE: MetricTiers = metric_tiers(
    "Source has low credibility.",
    "Source has mixed credibility.",
    "Source has good reputation.",
);

// Long wording used by the service analyzers.
pub const SERVICE_LANGUAGE: MetricTiers = metric_tiers(
    "Highly emotional language detected. Contains sensationalist phrases and potential manipulation techniques.",
    "Some emotional language present. Article tone is somewhat sensationalist.",
    "Neutral language detected. Article presents information in a balanced, objective manner.",
);
pub const SERVICE_FACT: MetricTiers = metric_tiers(
    "Multiple unverified claims detected. Several statements contradict established facts.",
    "Some claims require verification. The article mixes factual information with potentially misleading statements.",
    "Most claims appear to be factually accurate based on verification against trusted sources.",
);

/// Colour band the presentation layer uses for a score. Independent of the
/// reliability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTier {
    Danger,
    Warning,
    Success,
}

impl DisplayTier {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayTier::Danger => "danger",
            DisplayTier::Warning => "warning",
            DisplayTier::Success => "success",
        }
    }
}

pub const DISPLAY: TierTable<DisplayTier, 2> = TierTable::new(
    [(50.0, DisplayTier::Danger), (70.0, DisplayTier::Warning)],
    DisplayTier::Success,
);

pub fn reliability_label(score: f64) -> &'static str {
    RELIABILITY.classify(score)
}

pub fn language_tier(score: f64) -> &'static str {
    LANGUAGE.classify(score)
}

pub fn fact_tier(score: f64) -> &'static str {
    FACT.classify(score)
}

pub fn source_tier(score: f64) -> &'static str {
    SOURCE.classify(score)
}

pub fn display_tier(score: f64) -> DisplayTier {
    DISPLAY.classify(score)
}
