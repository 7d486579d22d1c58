//! Phased learning roadmap for a set of missing skills.
//!
//! Skills whose prerequisites the candidate already has are "ready" and fill the first two
//! phases, easiest and quickest first. Skills with an unmet prerequisite go to a final
//! phase. Each phase holds at most three skills and lasts as long as its slowest skill,
//! since the skills in one phase are learned side by side.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::scorer::lowercase_set;
use crate::reference::{Difficulty, LearningResource, ReferenceData};

const SKILLS_PER_PHASE: usize = 3;
/// Skills per phase that get a resource suggestion.
const RESOURCE_SLOTS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase: u32,
    pub duration_months: u32,
    pub focus: String,
    pub skills_to_learn: Vec<String>,
    pub priority: Priority,
    pub reasoning: String,
    pub resources: Vec<LearningResource>,
}

struct PlannedSkill<'a> {
    name: &'a str,
    difficulty: Difficulty,
    months: u32,
    unmet: Vec<&'a str>,
}

pub fn generate_learning_roadmap(
    missing: &[String],
    current: &[String],
    reference: &ReferenceData,
) -> Vec<LearningPhase> {
    let have = lowercase_set(current);

    // One slot per skill, whatever casing the target repeated it in; first spelling wins.
    let mut seen = HashSet::new();
    let (mut ready, blocked): (Vec<PlannedSkill<'_>>, Vec<PlannedSkill<'_>>) = missing
        .iter()
        .filter(|skill| seen.insert(skill.trim().to_lowercase()))
        .map(|skill| {
            let meta = reference.metadata.lookup(skill);
            PlannedSkill {
                name: skill.as_str(),
                difficulty: meta.difficulty,
                months: meta.learning_months,
                unmet: meta
                    .prerequisites
                    .iter()
                    .map(String::as_str)
                    .filter(|p| !have.contains(&p.trim().to_lowercase()))
                    .collect(),
            }
        })
        .partition(|planned| planned.unmet.is_empty());

    // Stable: equal (difficulty, months) keep their input order.
    ready.sort_by_key(|planned| (planned.difficulty.rank(), planned.months));

    let mut roadmap = Vec::new();

    if !ready.is_empty() {
        roadmap.push(build_phase(
            roadmap.len(),
            &ready[..ready.len().min(SKILLS_PER_PHASE)],
            "Foundation & Quick Wins",
            Priority::High,
            "These skills have no prerequisites and will give you immediate progress. \
             Start with these to build momentum."
                .to_string(),
            reference,
        ));
    }

    if ready.len() > SKILLS_PER_PHASE {
        let end = ready.len().min(2 * SKILLS_PER_PHASE);
        roadmap.push(build_phase(
            roadmap.len(),
            &ready[SKILLS_PER_PHASE..end],
            "Core Technical Skills",
            Priority::High,
            "Essential skills for the target role. Build on Phase 1 knowledge.".to_string(),
            reference,
        ));
    }

    if !blocked.is_empty() {
        let batch = &blocked[..blocked.len().min(SKILLS_PER_PHASE)];
        let mut prerequisites: Vec<&str> = Vec::new();
        for prereq in batch.iter().flat_map(|planned| planned.unmet.iter().copied()) {
            if !prerequisites.contains(&prereq) {
                prerequisites.push(prereq);
            }
        }
        roadmap.push(build_phase(
            roadmap.len(),
            batch,
            "Advanced Specialization",
            Priority::Medium,
            format!(
                "These require prerequisites ({}). Tackle after completing earlier phases.",
                prerequisites.join(", ")
            ),
            reference,
        ));
    }

    roadmap
}

fn build_phase(
    index: usize,
    batch: &[PlannedSkill<'_>],
    focus: &str,
    priority: Priority,
    reasoning: String,
    reference: &ReferenceData,
) -> LearningPhase {
    LearningPhase {
        phase: index as u32 + 1,
        duration_months: batch.iter().map(|p| p.months).max().unwrap_or_default(),
        focus: focus.to_string(),
        skills_to_learn: batch.iter().map(|p| p.name.to_string()).collect(),
        priority,
        reasoning,
        resources: batch
            .iter()
            .take(RESOURCE_SLOTS)
            .filter_map(|p| reference.resources.first_for(p.name).cloned())
            .collect(),
    }
}
