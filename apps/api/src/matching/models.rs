use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One job in the catalog. Only `job_id` is required when loading from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub job_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    /// `[min, max]`, in the currency unit the catalog uses.
    #[serde(default)]
    pub salary_range: [u64; 2],
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub experience_required: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
    /// Set on the ranker's private copy, never on catalog records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
}

impl JobPosting {
    pub fn is_remote(&self) -> bool {
        self.job_type.eq_ignore_ascii_case("remote")
    }
}

/// Optional ranking filters; an unset field does not filter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobFilters {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub min_salary: Option<u64>,
    #[serde(default)]
    pub max_salary: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInsights {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub match_percentage: f64,
}
