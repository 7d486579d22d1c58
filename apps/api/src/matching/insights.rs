use crate::matching::models::{JobPosting, MatchInsights};
use crate::matching::scorer::{lowercase_set, round_to_tenth};

const MAX_ADDITIONAL: usize = 5;

/// Skill-by-skill breakdown of one job against a candidate. Comparison ignores case;
/// matching/missing keep the job's spelling and additional keeps the candidate's.
pub fn matching_insights(candidate_skills: &[String], job: &JobPosting) -> MatchInsights {
    let candidate = lowercase_set(candidate_skills);
    let required = lowercase_set(&job.required_skills);

    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = job
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| candidate.contains(&skill.trim().to_lowercase()));

    let additional_skills = candidate_skills
        .iter()
        .filter(|skill| !required.contains(&skill.trim().to_lowercase()))
        .take(MAX_ADDITIONAL)
        .cloned()
        .collect();

    let match_percentage = if required.is_empty() {
        0.0
    } else {
        let matched = required.intersection(&candidate).count();
        round_to_tenth(matched as f64 / required.len() as f64 * 100.0)
    };

    MatchInsights {
        matching_skills,
        missing_skills,
        additional_skills,
        match_percentage,
    }
}
