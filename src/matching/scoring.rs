use serde::{Deserialize, Serialize};

use crate::matching::fuzzy::fuzzy_match;
use crate::matching::rate::{evaluate_rate, RateCompatibility};
use crate::matching::weights::{Weights, DEFAULT_WEIGHTS};
use crate::{Job, Tutor};

/// A scored (job, tutor) pairing. Built fresh on every ranking call and
/// rendered by the web front-end as is (reasons become badges).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub job: Job,
    pub score: u32,
    pub match_reasons: Vec<String>,
}

/// Per-dimension sub-scores. Each is either its full weight or zero (rate
/// additionally has the tiered close/partial steps); the total is a plain
/// sum with no cross-terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub subject: u32,
    pub level: u32,
    pub location: u32,
    pub rate: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.subject + self.level + self.location + self.rate
    }
}

/// Score each dimension independently: a dimension earns its weight when
/// ANY entry of the tutor's preference list fuzzy-matches the job's field.
/// Empty preference lists and an undeclared rate band contribute zero.
pub fn score_breakdown(job: &Job, tutor: &Tutor, weights: &Weights) -> ScoreBreakdown {
    let dimension = |value: &str, prefs: &[String], points: u32| -> u32 {
        if prefs.iter().any(|pref| fuzzy_match(value, pref)) {
            points
        } else {
            0
        }
    };

    ScoreBreakdown {
        subject: dimension(&job.subject, &tutor.subjects, weights.subject),
        level: dimension(&job.level, &tutor.levels, weights.level),
        location: dimension(&job.location, &tutor.locations, weights.location),
        rate: tutor
            .hourly_rates
            .as_ref()
            .map(|rates| evaluate_rate(&job.rate, rates).points(weights))
            .unwrap_or(0),
    }
}

/// Total relevance score for a (job, tutor) pair, 0–100.
pub fn calculate_match_score(job: &Job, tutor: &Tutor) -> u32 {
    score_breakdown(job, tutor, &DEFAULT_WEIGHTS).total()
}

/// Human-readable reasons for a positive match, evaluated independently of
/// the score. Emits the FIRST matching entry per dimension, in fixed
/// subject → level → location → rate order for stable display.
pub fn match_reasons(job: &Job, tutor: &Tutor) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(subject) = tutor.subjects.iter().find(|s| fuzzy_match(&job.subject, s)) {
        reasons.push(format!("Matches your subject: {subject}"));
    }

    if let Some(level) = tutor.levels.iter().find(|l| fuzzy_match(&job.level, l)) {
        reasons.push(format!("Matches your level: {level}"));
    }

    if let Some(location) = tutor.locations.iter().find(|l| fuzzy_match(&job.location, l)) {
        reasons.push(format!("Near your location: {location}"));
    }

    if let Some(rates) = &tutor.hourly_rates {
        match evaluate_rate(&job.rate, rates) {
            RateCompatibility::Perfect => reasons.push("Rate matches your range".to_string()),
            RateCompatibility::Close => reasons.push("Rate close to your range".to_string()),
            RateCompatibility::Partial
            | RateCompatibility::Mismatch
            | RateCompatibility::Unknown => {}
        }
    }

    reasons
}
