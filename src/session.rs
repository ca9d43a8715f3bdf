// src/session.rs
//! Presentation-side request tracking.
//!
//! Holds the "which request is current" state explicitly: every submission takes
//! a ticket and only the latest ticket's result is handed back. Older results are
//! dropped on arrival.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::analyze::client::{AnalysisClient, AnalysisOutcome, RemoteAnalyzer};

/// Advisory shown when the local heuristic produced the result.
pub const FALLBACK_NOTICE: &str = "Could not connect to server. Using local analysis.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Please enter news content or URL to analyze.")]
    EmptyInput,
}

/// Trim `raw`; whitespace-only input is rejected before any request is issued.
pub fn validate_submission(raw: &str) -> Result<&str, SubmitError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(SubmitError::EmptyInput)
    } else {
        Ok(trimmed)
    }
}

/// Monotonic submission id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

pub struct AnalysisSession<R> {
    client: AnalysisClient<R>,
    latest: AtomicU64,
}

impl<R: RemoteAnalyzer> AnalysisSession<R> {
    pub fn new(client: AnalysisClient<R>) -> Self {
        Self {
            client,
            latest: AtomicU64::new(0),
        }
    }

    pub fn client(&self) -> &AnalysisClient<R> {
        &self.client
    }

    /// Start a new submission; supersedes every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Hand `outcome` back only if `ticket` is still the latest.
    pub fn settle(&self, ticket: Ticket, outcome: AnalysisOutcome) -> Option<AnalysisOutcome> {
        if self.is_current(ticket) {
            Some(outcome)
        } else {
            debug!(ticket = ticket.0, "discarding stale analysis result");
            None
        }
    }

    /// Validate, analyze, and return the outcome unless a newer submission
    /// started in the meantime (`Ok(None)`).
    pub async fn submit(&self, raw: &str) -> Result<Option<AnalysisOutcome>, SubmitError> {
        let content = validate_submission(raw)?;
        let ticket = self.begin();
        let outcome = self.client.analyze(content).await;
        Ok(self.settle(ticket, outcome))
    }
}
