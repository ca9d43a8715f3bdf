// src/service/language.rs
//! Language-pattern analysis: clickbait phrases, shouting punctuation, ALL-CAPS
//! words and unusual sentence lengths pull the score down from a neutral 70.

use super::text;
use super::Assessment;
use crate::analyze::tiers::SERVICE_LANGUAGE;

pub const CLICKBAIT_PHRASES: &[&str] = &[
    "you won't believe",
    "shocking",
    "mind-blowing",
    "unbelievable",
    "jaw-dropping",
    "secret",
    "trick",
    "hack",
    "hidden",
    "they don't want you to know",
    "this will change",
    "never seen before",
    "stunning",
    "miracle",
    "bombshell",
    "exclusive",
    "revealed",
    "conspiracy",
    "what happens next will",
    "scientists shocked",
    "doctors hate",
    "one weird trick",
];

const NEUTRAL: f64 = 70.0;
const MIN_CHARS: usize = 20;

pub fn analyze(content: &str) -> Assessment {
    if content.trim().chars().count() < MIN_CHARS {
        return Assessment::new(0.0, "Insufficient content for analysis.");
    }

    let lower = content.to_lowercase();
    let sentence_count = text::sentences(content).len().max(1) as f64;

    let clickbait = CLICKBAIT_PHRASES
        .iter()
        .filter(|p| lower.contains(*p))
        .count() as f64;
    let shouting = content.chars().filter(|c| matches!(*c, '!' | '?')).count() as f64;

    let words = text::content_words(content);
    let caps = words
        .iter()
        .filter(|w| w.chars().count() > 2 && is_all_caps(w))
        .count() as f64;
    let caps_ratio = caps / words.len().max(1) as f64;

    let avg_sentence_len = text::words(content).len() as f64 / sentence_count;

    let mut score = NEUTRAL;
    score -= clickbait / sentence_count * 30.0;
    score -= shouting / sentence_count * 20.0;
    score -= caps_ratio * 25.0;
    if !(5.0..=40.0).contains(&avg_sentence_len) {
        score -= 10.0;
    }

    let score = score.clamp(0.0, 100.0);
    Assessment::new(score, SERVICE_LANGUAGE.classify(score))
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_insufficient() {
        let a = analyze("  too short  ");
        assert_eq!(a.score, 0.0);
        assert_eq!(a.analysis, "Insufficient content for analysis.");
    }

    #[test]
    fn calm_prose_stays_neutral() {
        let a = analyze(
            "The city council approved the annual budget on Tuesday after a long debate. \
             Officials said the plan funds road repairs and two new libraries.",
        );
        assert_eq!(a.score, 70.0);
        assert_eq!(a.analysis, SERVICE_LANGUAGE.classify(70.0));
    }

    #[test]
    fn sensational_text_scores_low() {
        let a = analyze(
            "SHOCKING bombshell REVEALED! You won't believe this miracle trick! \
             Doctors hate it!!! What happens next will stun you?",
        );
        assert!(a.score < 40.0, "score {}", a.score);
        assert!(a.analysis.starts_with("Highly emotional language detected."));
    }
}
