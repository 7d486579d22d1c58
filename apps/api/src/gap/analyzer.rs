//! Skill gap between what a candidate has and what a role asks for.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::scorer::{lowercase_set, round_to_tenth};
use crate::reference::SkillMetadataTable;

/// Qualitative readiness band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    #[serde(rename = "High - Ready to apply")]
    High,
    #[serde(rename = "Medium - Close to ready")]
    Medium,
    #[serde(rename = "Low - Significant gaps")]
    Low,
    #[serde(rename = "Very Low - Major upskilling needed")]
    VeryLow,
}

impl ReadinessLevel {
    pub fn from_readiness(readiness: f64) -> Self {
        if readiness >= 80.0 {
            ReadinessLevel::High
        } else if readiness >= 60.0 {
            ReadinessLevel::Medium
        } else if readiness >= 40.0 {
            ReadinessLevel::Low
        } else {
            ReadinessLevel::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReadinessLevel::High => "High - Ready to apply",
            ReadinessLevel::Medium => "Medium - Close to ready",
            ReadinessLevel::Low => "Low - Significant gaps",
            ReadinessLevel::VeryLow => "Very Low - Major upskilling needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub skill_gap_percentage: f64,
    pub readiness_score: f64,
    pub estimated_learning_time_months: u32,
    pub confidence_level: ReadinessLevel,
}

/// Compares case-insensitively. `matching_skills` and `missing_skills` are taken from
/// `target` in its order and spelling. An empty target is a 0% gap.
pub fn analyze_skill_gap(
    current: &[String],
    target: &[String],
    metadata: &SkillMetadataTable,
) -> GapAnalysis {
    let current_set = lowercase_set(current);
    let target_set = lowercase_set(target);

    let (matching_skills, missing_skills): (Vec<String>, Vec<String>) = target
        .iter()
        .cloned()
        .partition(|skill| current_set.contains(&skill.trim().to_lowercase()));

    let missing_count = target_set.difference(&current_set).count();
    let skill_gap_percentage = if target_set.is_empty() {
        0.0
    } else {
        round_to_tenth(missing_count as f64 / target_set.len() as f64 * 100.0)
    };
    // Derived from the rounded gap so the pair always sums to exactly 100.
    let readiness_score = 100.0 - skill_gap_percentage;

    // Each distinct missing skill counts once, however often the target repeats it.
    let mut seen = HashSet::new();
    let estimated_learning_time_months = missing_skills
        .iter()
        .filter(|skill| seen.insert(skill.trim().to_lowercase()))
        .map(|skill| metadata.lookup(skill).learning_months)
        .sum();

    GapAnalysis {
        matching_skills,
        missing_skills,
        skill_gap_percentage,
        readiness_score,
        estimated_learning_time_months,
        confidence_level: ReadinessLevel::from_readiness(readiness_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn analyze(current: &[&str], target: &[&str]) -> GapAnalysis {
        analyze_skill_gap(
            &skills(current),
            &skills(target),
            &SkillMetadataTable::builtin(),
        )
    }

    #[test]
    fn test_all_skills_matched() {
        let result = analyze(&["Python", "React", "FastAPI"], &["Python", "React", "FastAPI"]);
        assert_eq!(result.skill_gap_percentage, 0.0);
        assert_eq!(result.readiness_score, 100.0);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.confidence_level.label(), "High - Ready to apply");
    }

    #[test]
    fn test_partial_gap() {
        let result = analyze(&["Python", "React"], &["Python", "React", "Docker", "AWS"]);
        assert_eq!(result.matching_skills, vec!["Python", "React"]);
        assert_eq!(result.missing_skills, vec!["Docker", "AWS"]);
        assert_eq!(result.skill_gap_percentage, 50.0);
        assert_eq!(result.readiness_score, 50.0);
        assert_eq!(result.confidence_level, ReadinessLevel::Low);
        // Docker 2 + AWS 4
        assert_eq!(result.estimated_learning_time_months, 6);
    }

    #[test]
    fn test_no_current_skills() {
        let result = analyze(&[], &["Python", "Docker"]);
        assert!(result.matching_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Python", "Docker"]);
        assert_eq!(result.readiness_score, 0.0);
        assert_eq!(result.confidence_level, ReadinessLevel::VeryLow);
    }

    #[test]
    fn test_empty_target() {
        let result = analyze(&["Python"], &[]);
        assert_eq!(result.skill_gap_percentage, 0.0);
        assert_eq!(result.readiness_score, 100.0);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.estimated_learning_time_months, 0);
    }

    #[test]
    fn test_case_insensitive_keeps_target_casing() {
        let result = analyze(&["python", "react"], &["Python", "React", "Docker"]);
        assert_eq!(result.matching_skills, vec!["Python", "React"]);
        assert_eq!(result.missing_skills, vec!["Docker"]);

        let single = analyze(&["python"], &["Python"]);
        assert_eq!(single.matching_skills, vec!["Python"]);
        assert!(single.missing_skills.is_empty());
    }

    #[test]
    fn test_unknown_skill_defaults_to_two_months() {
        let result = analyze(&[], &["Haskell", "Elm"]);
        assert_eq!(result.estimated_learning_time_months, 4);
    }

    #[test]
    fn test_gap_and_readiness_sum_to_100() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["a"], &["a", "b", "c"]),
            (&[], &["a", "b", "c", "d", "e", "f", "g"]),
            (&["x", "y"], &["x", "y", "z"]),
            (&["A"], &["a", "A", "b"]),
        ];
        for (current, target) in cases {
            let r = analyze(current, target);
            assert_eq!(r.skill_gap_percentage + r.readiness_score, 100.0);
        }
    }

    #[test]
    fn test_readiness_thresholds() {
        assert_eq!(ReadinessLevel::from_readiness(80.0), ReadinessLevel::High);
        assert_eq!(ReadinessLevel::from_readiness(79.9), ReadinessLevel::Medium);
        assert_eq!(ReadinessLevel::from_readiness(60.0), ReadinessLevel::Medium);
        assert_eq!(ReadinessLevel::from_readiness(40.0), ReadinessLevel::Low);
        assert_eq!(ReadinessLevel::from_readiness(39.9), ReadinessLevel::VeryLow);
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_value(ReadinessLevel::Medium).unwrap();
        assert_eq!(json, "Medium - Close to ready");
    }
}
