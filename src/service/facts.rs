// src/service/facts.rs
//! Fact-consistency analysis: hedging lowers the score, concrete dates and
//! statistics raise it, and adjacent sentences that negate each other count as
//! contradictions.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use super::text;
use super::Assessment;
use crate::analyze::tiers::SERVICE_FACT;

pub const HEDGE_WORDS: &[&str] = &[
    "allegedly",
    "reportedly",
    "supposedly",
    "claims",
    "could be",
    "might be",
    "perhaps",
    "possibly",
    "rumored",
    "speculated",
    "unconfirmed",
    "unverified",
];

const NEGATIONS: &[&str] = &["not", "no", "never", "none", "neither", "nor", "nothing"];

const NEUTRAL: f64 = 65.0;
const MIN_CHARS: usize = 20;
const MAX_SPECIFICS: usize = 10;
/// Shared distinct tokens above which a negated follow-up counts as a contradiction.
const CONTRADICTION_OVERLAP: usize = 3;

static HEDGE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    HEDGE_WORDS
        .iter()
        .map(|w| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w))).expect("hedge regex"))
        .collect()
});

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:st|nd|rd|th)?,\s+\d{4}\b|\b\d{1,2}/\d{1,2}/\d{2,4}\b",
    )
    .expect("date regex")
});

static STATISTIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?%|\b\d+ percent\b|\b\d+ out of \d+\b").expect("statistic regex")
});

pub fn hedge_count(content: &str) -> usize {
    HEDGE_RES.iter().filter(|re| re.is_match(content)).count()
}

pub fn specifics_count(content: &str) -> usize {
    DATE_RE.find_iter(content).count() + STATISTIC_RE.find_iter(content).count()
}

/// Sentences containing a negation that share more than three distinct tokens
/// with the sentence before them.
pub fn contradiction_count(content: &str) -> usize {
    let token_sets: Vec<HashSet<String>> = text::sentences(content)
        .into_iter()
        .map(|s| text::lower_words(s).into_iter().collect())
        .collect();

    token_sets
        .windows(2)
        .filter(|pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            NEGATIONS.iter().any(|n| cur.contains(*n))
                && cur.intersection(prev).count() > CONTRADICTION_OVERLAP
        })
        .count()
}

pub fn analyze(content: &str) -> Assessment {
    if content.trim().chars().count() < MIN_CHARS {
        return Assessment::new(50.0, "Insufficient content for fact consistency analysis.");
    }

    let mut score = NEUTRAL;
    score -= hedge_count(content) as f64 * 5.0;
    score += specifics_count(content).min(MAX_SPECIFICS) as f64 * 3.0;
    score -= contradiction_count(content) as f64 * 15.0;

    let score = score.clamp(0.0, 100.0);
    Assessment::new(score, SERVICE_FACT.classify(score))
}
