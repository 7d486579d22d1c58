use serde::{Deserialize, Serialize};

/// Duration placeholder for an experience entry whose dates were not found.
pub const DURATION_NOT_SPECIFIED: &str = "Not specified";

/// Name reported when extraction produced nothing at all.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    #[serde(rename = "field")]
    pub field_of_study: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cgpa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: Vec<String>,
}

impl ExperienceEntry {
    pub fn has_duration(&self) -> bool {
        !self.duration.is_empty() && self.duration != DURATION_NOT_SPECIFIED
    }
}

/// Per-field confidence, each in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceScores {
    pub name: f64,
    pub email: f64,
    pub phone: f64,
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
}

/// Structured candidate profile produced by one parse call.
/// Missing keys default when a profile is posted back, e.g. for job matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<String>,
    pub confidence_scores: ConfidenceScores,
}

impl ParsedProfile {
    /// The result for unsupported or unreadable input: every field empty, every confidence 0.
    pub fn empty() -> Self {
        Self::default()
    }
}
