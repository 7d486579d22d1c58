//! Match scoring: how well a candidate's skills cover one job's requirements.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so handlers never name the implementation.
//! The default is `WeightedMatchScorer`.

use std::collections::HashSet;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

pub trait MatchScorer: Send + Sync {
    /// Score in `[0, 100]`, rounded to one decimal.
    fn score(&self, candidate_skills: &[String], job_skills: &[String], experience_years: u32)
        -> f64;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

const EXACT_WEIGHT: f64 = 60.0;
const DEPTH_WEIGHT: f64 = 20.0;
const CRITICAL_WEIGHT: f64 = 15.0;
const EXPERIENCE_PER_YEAR: f64 = 2.5;
const EXPERIENCE_CAP: f64 = 5.0;
/// Breadth stops counting past this many skills.
const DEPTH_SATURATION: usize = 10;
/// Leading required skills treated as critical.
const CRITICAL_COUNT: usize = 3;

/// Four weighted components, all case-insensitive:
/// 1. exact: share of the job's distinct skills the candidate has × 60
/// 2. depth: candidate breadth × 20, saturating at `min(job size, 10)` skills
/// 3. critical: share of the job's first three skills the candidate has × 15
/// 4. experience: 2.5 per year, capped at 5
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMatchScorer;

impl MatchScorer for WeightedMatchScorer {
    fn score(
        &self,
        candidate_skills: &[String],
        job_skills: &[String],
        experience_years: u32,
    ) -> f64 {
        if job_skills.is_empty() {
            return 0.0;
        }

        let candidate = lowercase_set(candidate_skills);
        let job = lowercase_set(job_skills);

        let matched = job.intersection(&candidate).count();
        let exact = matched as f64 / job.len() as f64 * EXACT_WEIGHT;

        // Saturates at the job size, not a flat 10: holding every required skill scores 100.
        let saturation = job.len().min(DEPTH_SATURATION);
        let depth = candidate_skills.len().min(saturation) as f64 / saturation as f64 * DEPTH_WEIGHT;

        let critical_set = lowercase_set(&job_skills[..job_skills.len().min(CRITICAL_COUNT)]);
        let critical = if critical_set.is_empty() {
            0.0
        } else {
            critical_set.intersection(&candidate).count() as f64 / critical_set.len() as f64
                * CRITICAL_WEIGHT
        };

        let experience = (experience_years as f64 * EXPERIENCE_PER_YEAR).min(EXPERIENCE_CAP);

        round_to_tenth((exact + depth + critical + experience).min(100.0))
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

pub(crate) fn lowercase_set(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.trim().to_lowercase()).collect()
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
