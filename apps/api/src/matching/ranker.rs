//! Scores, filters and orders a job collection for one candidate.

use std::cmp::Ordering;

use tracing::debug;

use crate::matching::models::{JobFilters, JobPosting};
use crate::matching::scorer::{lowercase_set, MatchScorer};

/// Returns scored copies of the jobs that pass every set filter, best match first.
/// Equal scores are ordered by how many required skills the candidate has, then by
/// catalog order. The input slice is never modified.
pub fn rank_jobs(
    scorer: &dyn MatchScorer,
    candidate_skills: &[String],
    jobs: &[JobPosting],
    experience_years: u32,
    filters: &JobFilters,
) -> Vec<JobPosting> {
    let candidate = lowercase_set(candidate_skills);

    let mut ranked: Vec<(usize, JobPosting)> = jobs
        .iter()
        .filter(|job| passes_filters(job, filters))
        .map(|job| {
            let mut scored = job.clone();
            scored.match_score =
                Some(scorer.score(candidate_skills, &job.required_skills, experience_years));
            let matched = lowercase_set(&job.required_skills)
                .intersection(&candidate)
                .count();
            (matched, scored)
        })
        .collect();

    // Equal scores fall back to matched-skill count. `sort_by` is stable, so catalog order
    // survives full ties.
    ranked.sort_by(|(matched_a, a), (matched_b, b)| {
        let score_a = a.match_score.unwrap_or_default();
        let score_b = b.match_score.unwrap_or_default();
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(Ordering::Equal)
            .then_with(|| matched_b.cmp(matched_a))
    });

    debug!(
        "Ranked {} of {} jobs with the {} scorer",
        ranked.len(),
        jobs.len(),
        scorer.backend()
    );

    ranked.into_iter().map(|(_, job)| job).collect()
}

fn passes_filters(job: &JobPosting, filters: &JobFilters) -> bool {
    if let Some(location) = filters.location.as_deref() {
        if !job.location.eq_ignore_ascii_case(location.trim()) && !job.is_remote() {
            return false;
        }
    }
    if let Some(min) = filters.min_salary {
        if job.salary_range[1] < min {
            return false;
        }
    }
    if let Some(max) = filters.max_salary {
        if job.salary_range[0] > max {
            return false;
        }
    }
    true
}
