//! Dimension-level preference filter used by the notification bot to decide
//! which newly posted jobs are worth pushing to a linked tutor account.
//! Unlike the scored ranking, every populated dimension must pass; an empty
//! preference list is a wildcard, not a veto.

use crate::matching::fuzzy::fuzzy_match;
use crate::{Job, Tutor};

fn dimension_matches(value: &str, prefs: &[String]) -> bool {
    prefs.is_empty() || prefs.iter().any(|pref| fuzzy_match(value, pref))
}

/// True when the job clears every preference dimension the tutor declared.
/// Rate is deliberately not part of the push decision; it only affects
/// ranking and the displayed reasons.
pub fn matches_preferences(job: &Job, tutor: &Tutor) -> bool {
    dimension_matches(&job.subject, &tutor.subjects)
        && dimension_matches(&job.level, &tutor.levels)
        && dimension_matches(&job.location, &tutor.locations)
}

/// The subset of `jobs` that clears `matches_preferences`, in input order.
pub fn filter_matching_jobs(jobs: &[Job], tutor: &Tutor) -> Vec<Job> {
    jobs.iter()
        .filter(|job| matches_preferences(job, tutor))
        .cloned()
        .collect()
}
