use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::experience_years::estimate_experience_years;
use crate::matching::insights::matching_insights;
use crate::matching::ranker::rank_jobs;
use crate::matching::{JobFilters, JobPosting, MatchInsights};
use crate::parsing::ParsedProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchQuery {
    /// Comma-separated skill list.
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience_years: u32,
    pub location: Option<String>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct JobMatchRequest {
    pub profile: ParsedProfile,
    /// Estimated from the profile's experience entries when absent.
    pub experience_years: Option<u32>,
    #[serde(flatten)]
    pub filters: JobFilters,
}

#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RankedJobsResponse {
    pub total: usize,
    pub experience_years: u32,
    pub jobs: Vec<JobPosting>,
}

#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub job_id: String,
    pub title: String,
    pub company: String,
    pub match_score: f64,
    #[serde(flatten)]
    pub insights: MatchInsights,
}

/// GET /api/v1/jobs/search?skills=python,react&experience_years=2&location=Pune
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<Json<RankedJobsResponse>, AppError> {
    let skills = split_skills(&query.skills);
    let filters = JobFilters {
        location: query.location.filter(|l| !l.trim().is_empty()),
        min_salary: query.min_salary,
        max_salary: query.max_salary,
    };
    Ok(Json(rank(&state, &skills, query.experience_years, &filters)))
}

/// POST /api/v1/jobs/match
/// Ranks the catalog for a parsed profile.
pub async fn handle_match_profile(
    State(state): State<AppState>,
    Json(req): Json<JobMatchRequest>,
) -> Result<Json<RankedJobsResponse>, AppError> {
    let years = req.experience_years.unwrap_or_else(|| {
        estimate_experience_years(&req.profile.experience, Utc::now().date_naive())
    });
    Ok(Json(rank(&state, &req.profile.skills, years, &req.filters)))
}

/// POST /api/v1/jobs/:job_id/insights
pub async fn handle_job_insights(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
    Json(req): Json<InsightsRequest>,
) -> Result<Json<InsightsResponse>, AppError> {
    let job = state
        .catalog
        .find(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job '{job_id}' not found")))?;

    let match_score = state
        .match_scorer
        .score(&req.candidate_skills, &job.required_skills, 0);

    Ok(Json(InsightsResponse {
        job_id: job.job_id.clone(),
        title: job.title.clone(),
        company: job.company.clone(),
        match_score,
        insights: matching_insights(&req.candidate_skills, job),
    }))
}

fn rank(
    state: &AppState,
    skills: &[String],
    experience_years: u32,
    filters: &JobFilters,
) -> RankedJobsResponse {
    let jobs = rank_jobs(
        state.match_scorer.as_ref(),
        skills,
        state.catalog.jobs(),
        experience_years,
        filters,
    );
    info!(
        "Job ranking: {} skills, {} years, {} of {} jobs kept",
        skills.len(),
        experience_years,
        jobs.len(),
        state.catalog.len()
    );
    RankedJobsResponse {
        total: jobs.len(),
        experience_years,
        jobs,
    }
}

fn split_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
