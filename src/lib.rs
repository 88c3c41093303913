pub mod logging;
pub mod matching;
pub mod normalize;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

pub use matching::pipeline::{rank_jobs, recommend_jobs, EngineConfig, MatchingEngine};
pub use matching::prefilter::{filter_matching_jobs, matches_preferences};
pub use matching::scoring::{calculate_match_score, match_reasons, MatchResult};

// Data model shared by the matching functions. Field names serialize in
// camelCase to line up with the marketplace API payloads.

/// A job posting as consumed by the matcher. All matched fields are free
/// text entered by admins ("E Maths", "Secondary 3-4", "$40-60/hr", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Posting id, passed through so the notification collaborator can
    /// dedup already-sent alerts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub subject: String,
    pub level: String,
    pub location: String,
    pub rate: String,
}

/// A tutor's declared preference lists. Empty lists simply never match
/// their dimension; `hourly_rates: None` means no rate preference declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutor {
    pub subjects: Vec<String>,
    pub levels: Vec<String>,
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rates: Option<HourlyRates>,
}

/// Declared acceptable hourly rate band, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRates {
    pub min: f64,
    pub max: f64,
}
