// src/analyze/mod.rs
//! Analysis request/fallback pipeline: the client, the local heuristic, and the
//! threshold tables both share.

pub mod client;
pub mod heuristic;
pub mod tiers;
pub mod types;
pub mod url;

// Re-export convenient types.
pub use crate::analyze::client::{
    AnalysisClient, AnalysisOutcome, HttpAnalyzer, RemoteAnalyzer, RemoteError,
};
pub use crate::analyze::heuristic::{RandomUnits, ScriptedUnits, UnitSource};
pub use crate::analyze::tiers::{display_tier, reliability_label, DisplayTier};
pub use crate::analyze::types::{AnalysisRequest, AnalyzeEnvelope, ScoreBundle};
pub use crate::analyze::url::extract_url;
