use crate::matching::scoring::{calculate_match_score, match_reasons, MatchResult};
use crate::matching::weights::{Weights, DEFAULT_WEIGHTS};
use crate::{Job, Tutor};

/// Engine thresholds. `recommend_min_score` of 30 means at least one
/// full-weight dimension (subject or level) matched; anything below is
/// treated as noise.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub weights: Weights,
    pub recommend_min_score: u32,
    pub recommend_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            recommend_min_score: 30,
            recommend_limit: 4,
        }
    }
}

impl EngineConfig {
    /// Environment overrides for the recommendation thresholds.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            weights: DEFAULT_WEIGHTS,
            recommend_min_score: std::env::var("TUTORMATCH_RECOMMEND_MIN_SCORE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.recommend_min_score),
            recommend_limit: std::env::var("TUTORMATCH_RECOMMEND_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.recommend_limit),
        }
    }
}

pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn default() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Map every job to a `MatchResult` and sort by score descending. The
    /// sort is stable, so equal scores keep their input order; no job is
    /// dropped or duplicated.
    pub fn rank_jobs(&self, jobs: &[Job], tutor: &Tutor) -> Vec<MatchResult> {
        let mut ranked: Vec<MatchResult> = jobs
            .iter()
            .map(|job| MatchResult {
                job: job.clone(),
                score: calculate_match_score(job, tutor),
                match_reasons: match_reasons(job, tutor),
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            jobs = jobs.len(),
            top_score = ranked.first().map(|r| r.score).unwrap_or(0),
            "ranked jobs for tutor"
        );

        ranked
    }

    /// Ranked jobs filtered to the recommendable subset and truncated to
    /// the configured limit.
    pub fn recommend_jobs(&self, jobs: &[Job], tutor: &Tutor) -> Vec<MatchResult> {
        let mut recommended: Vec<MatchResult> = self
            .rank_jobs(jobs, tutor)
            .into_iter()
            .filter(|result| result.score >= self.config.recommend_min_score)
            .collect();
        recommended.truncate(self.config.recommend_limit);

        tracing::debug!(
            recommended = recommended.len(),
            min_score = self.config.recommend_min_score,
            "filtered recommendations"
        );

        recommended
    }
}

/// Rank with the default engine configuration.
pub fn rank_jobs(jobs: &[Job], tutor: &Tutor) -> Vec<MatchResult> {
    MatchingEngine::default().rank_jobs(jobs, tutor)
}

/// Recommend with the default threshold and an explicit limit.
pub fn recommend_jobs(jobs: &[Job], tutor: &Tutor, limit: usize) -> Vec<MatchResult> {
    MatchingEngine::new(EngineConfig {
        recommend_limit: limit,
        ..EngineConfig::default()
    })
    .recommend_jobs(jobs, tutor)
}
