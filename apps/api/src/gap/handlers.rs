use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::gap::{analyze_skill_gap, generate_learning_roadmap, GapAnalysis, LearningPhase};
use crate::reference::CategorizedSkills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillAnalysisRequest {
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default)]
    pub target_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillAnalysisResponse {
    pub analysis: GapAnalysis,
    pub learning_roadmap: Vec<LearningPhase>,
    /// Target skills grouped by taxonomy tier.
    pub skill_categories: CategorizedSkills,
}

/// POST /api/v1/skills/analyze
pub async fn handle_analyze_skills(
    State(state): State<AppState>,
    Json(req): Json<SkillAnalysisRequest>,
) -> Result<Json<SkillAnalysisResponse>, AppError> {
    if req.target_skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation(
            "target_skills must contain at least one skill".to_string(),
        ));
    }

    let reference = &state.reference;
    let analysis = analyze_skill_gap(&req.current_skills, &req.target_skills, &reference.metadata);
    let learning_roadmap =
        generate_learning_roadmap(&analysis.missing_skills, &req.current_skills, reference);
    let skill_categories = reference.taxonomy.categorize(&req.target_skills);

    info!(
        "Gap analysis: {} target skills, readiness {}% ({}), {} roadmap phases",
        req.target_skills.len(),
        analysis.readiness_score,
        analysis.confidence_level.label(),
        learning_roadmap.len()
    );

    Ok(Json(SkillAnalysisResponse {
        analysis,
        learning_roadmap,
        skill_categories,
    }))
}
