pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::gap::handlers as gap;
use crate::matching::handlers as matching;
use crate::parsing::handlers as parsing;
use crate::state::AppState;

/// Room for multipart framing and JSON escaping on top of the document itself.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes.saturating_add(BODY_LIMIT_SLACK);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume parsing
        .route("/api/v1/resume/parse", post(parsing::handle_parse_upload))
        .route(
            "/api/v1/resume/parse-text",
            post(parsing::handle_parse_text),
        )
        // Job matching
        .route("/api/v1/jobs/search", get(matching::handle_search_jobs))
        .route("/api/v1/jobs/match", post(matching::handle_match_profile))
        .route(
            "/api/v1/jobs/:job_id/insights",
            post(matching::handle_job_insights),
        )
        // Skill gap
        .route("/api/v1/skills/analyze", post(gap::handle_analyze_skills))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
