// src/logging.rs
//! Tracing setup and log-safe helpers. Raw user text never goes into logs; use
//! [`content_id`] instead.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const ENV_DEV_LOG: &str = "CREDIBILITY_DEV_LOG";

/// Dev logging gate: CREDIBILITY_DEV_LOG=1 AND dev env (debug build or
/// SHUTTLE_ENV in {local, development, dev}).
pub fn dev_logging_enabled() -> bool {
    let on = std::env::var(ENV_DEV_LOG).ok().as_deref() == Some("1");
    if !on {
        return false;
    }
    if cfg!(debug_assertions) {
        return true;
    }
    matches!(
        std::env::var("SHUTTLE_ENV")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str(),
        "local" | "development" | "dev"
    )
}

/// Compact tracing for the server, only when [`dev_logging_enabled`].
pub fn init_dev_tracing() {
    if !dev_logging_enabled() {
        return;
    }
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("credibility=info,credibility_scorer=info,warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

/// Stderr logging for command-line use; `RUST_LOG` wins over `default_directive`.
pub fn init_cli_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

/// Short anonymized id for a piece of content (first 6 bytes of SHA-256, hex).
pub fn content_id(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

/// Single line, at most `max` chars, whitespace collapsed.
pub fn truncate_for_log(input: &str, max: usize) -> String {
    let mut out = String::with_capacity(max.min(input.len()));
    let mut count = 0;
    for word in input.split_whitespace() {
        if count > 0 {
            if count + 1 >= max {
                break;
            }
            out.push(' ');
            count += 1;
        }
        for ch in word.chars() {
            if count >= max {
                return out;
            }
            out.push(ch);
            count += 1;
        }
    }
    out
}
