// src/analyze/heuristic.rs
//! Local fallback scorer.
//!
//! The shape of the result is deterministic, the magnitudes are not:
//! - baseline  = max(30, 100 - len/50)
//! - overall   = clamp(baseline ± 15)
//! - sub-score = clamp(overall ± 10), one independent draw per metric
//!
//! Labels and tier texts are derived from the final numbers through [`super::tiers`].
//! Randomness is injected as a [`UnitSource`] so callers (and tests) decide where
//! the draws come from.

use rand::Rng;

use super::tiers;
use super::types::ScoreBundle;

pub const BASELINE_FLOOR: f64 = 30.0;
pub const CHARS_PER_POINT: f64 = 50.0;
pub const OVERALL_SPREAD: f64 = 15.0;
pub const METRIC_SPREAD: f64 = 10.0;

/// Source of uniform values in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomUnits<R>(pub R);

impl<R: Rng> UnitSource for RandomUnits<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed sequence, cycling when exhausted. An empty script yields 0.5
/// (zero offset).
#[derive(Debug, Clone, Default)]
pub struct ScriptedUnits {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedUnits {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }
}

impl UnitSource for ScriptedUnits {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

/// Content length as the browser widget measured it (UTF-16 code units).
pub fn content_length(content: &str) -> usize {
    content.encode_utf16().count()
}

/// Length-based baseline, floored at [`BASELINE_FLOOR`].
pub fn baseline(content: &str) -> f64 {
    (100.0 - content_length(content) as f64 / CHARS_PER_POINT).max(BASELINE_FLOOR)
}

fn clamp_score(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Symmetric offset in `[-spread, +spread)` from one unit draw.
fn jitter(units: &mut impl UnitSource, spread: f64) -> f64 {
    units.next_unit() * 2.0 * spread - spread
}

/// Score `content` drawing overall, language, fact, source offsets in that order.
pub fn score(content: &str, units: &mut impl UnitSource) -> ScoreBundle {
    let overall = clamp_score(baseline(content) + jitter(units, OVERALL_SPREAD));
    let language = clamp_score(overall + jitter(units, METRIC_SPREAD));
    let fact = clamp_score(overall + jitter(units, METRIC_SPREAD));
    let source = clamp_score(overall + jitter(units, METRIC_SPREAD));

    ScoreBundle {
        overall_score: overall,
        reliability_label: tiers::reliability_label(overall).to_string(),
        language_score: language,
        fact_score: fact,
        source_score: source,
        language_analysis: tiers::language_tier(language).to_string(),
        fact_analysis: tiers::fact_tier(fact).to_string(),
        source_analysis: tiers::source_tier(source).to_string(),
    }
}

/// [`score`] with the thread-local generator.
pub fn score_random(content: &str) -> ScoreBundle {
    score(content, &mut RandomUnits(rand::rng()))
}
