// src/analyze/url.rs
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("url regex"));

static DOMAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://(?:www\.)?([^/\s]+)").expect("domain regex"));

/// First http(s) token in `text`, up to the next whitespace.
pub fn extract_url(text: &str) -> Option<String> {
    URL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Lowercased host of `url` without a leading `www.`.
pub fn domain_of(url: &str) -> Option<String> {
    let lower = url.to_lowercase();
    DOMAIN_RE
        .captures(&lower)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
