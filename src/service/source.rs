// src/service/source.rs
//! Source credibility: known domains first, then attribution density in the text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::text;
use super::Assessment;
use crate::analyze::url::domain_of;

pub const RELIABLE_SOURCES: &[&str] = &[
    "reuters.com",
    "apnews.com",
    "npr.org",
    "bbc.com",
    "bbc.co.uk",
    "economist.com",
    "nature.com",
    "science.org",
    "scientificamerican.com",
    "nejm.org",
    "washingtonpost.com",
    "nytimes.com",
    "wsj.com",
    "bloomberg.com",
    "ft.com",
    "time.com",
    "cnn.com",
    "nbcnews.com",
    "abcnews.go.com",
    "cbsnews.com",
];

pub const QUESTIONABLE_SOURCES: &[&str] = &[
    "infowars.com",
    "naturalhealth.news",
    "breitbart.com",
    "dailybuzzlive.com",
    "worldnewsdailyreport.com",
    "empirenews.net",
    "huzlers.com",
    "theonion.com",
    "clickhole.com",
    "babylonbee.com",
    "newslo.com",
    "nationalreport.net",
    "bizarretoday.com",
    "worldtruth.tv",
    "unconfirmedbreakinginfo.com",
];

const RELIABLE: Assessment = Assessment::new(
    85.0,
    "Source has good reputation for accuracy and journalistic standards.",
);
const QUESTIONABLE: Assessment = Assessment::new(
    25.0,
    "Source has low credibility rating. Known for publishing misleading or false information.",
);
const UNKNOWN: Assessment = Assessment::new(
    50.0,
    "Unable to assess source credibility with provided information.",
);
const WELL_ATTRIBUTED: Assessment = Assessment::new(
    75.0,
    "Source includes multiple attributions and citations. Appears to follow journalistic standards.",
);
const SOME_ATTRIBUTION: Assessment = Assessment::new(
    60.0,
    "Source has some attributions. Has moderate credibility indicators.",
);
const MIXED: Assessment = Assessment::new(
    45.0,
    "Source has mixed credibility. Has published both accurate and misleading content in the past.",
);

static CITATION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)according to [^.,]+",
        r"(?i)cited in [^.,]+",
        r"(?i)reported by [^.,]+",
        r"(?i)published in [^.,]+",
        r"(?i)study in [^.,]+",
        r"(?i)research from [^.,]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("citation regex"))
    .collect()
});

static QUOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]+""#).expect("quote regex"));

/// Known-list verdict for the URL's domain, if any.
fn domain_verdict(url: &str) -> Option<Assessment> {
    let domain = domain_of(url)?;
    if RELIABLE_SOURCES.iter().any(|d| domain.contains(d)) {
        Some(RELIABLE)
    } else if QUESTIONABLE_SOURCES.iter().any(|d| domain.contains(d)) {
        Some(QUESTIONABLE)
    } else {
        None
    }
}

/// Citations plus quoted spans per hundred words (at least one hundred).
pub fn attribution_density(content: &str) -> f64 {
    let citations: usize = CITATION_RES
        .iter()
        .map(|re| re.find_iter(content).count())
        .sum();
    let quotes = QUOTE_RE.find_iter(content).count();
    let word_count = text::words(content).len().max(1) as f64;
    (citations + quotes) as f64 / (word_count / 100.0).max(1.0)
}

pub fn analyze(content: &str, url: Option<&str>) -> Assessment {
    if let Some(verdict) = url.and_then(domain_verdict) {
        return verdict;
    }
    if content.trim().is_empty() {
        return UNKNOWN;
    }

    let density = attribution_density(content);
    if density > 1.5 {
        WELL_ATTRIBUTED
    } else if density > 0.5 {
        SOME_ATTRIBUTION
    } else {
        MIXED
    }
}
