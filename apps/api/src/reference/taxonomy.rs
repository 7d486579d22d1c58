//! Skill tiers used to group a skill list for display next to a gap analysis.

use serde::{Deserialize, Serialize};

/// Tier lists as stored in `skills_taxonomy.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillTaxonomy {
    #[serde(default)]
    pub core_technical: Vec<String>,
    #[serde(default)]
    pub infrastructure: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub foundational: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub core: Vec<String>,
    pub infrastructure: Vec<String>,
    pub tools: Vec<String>,
    pub foundational: Vec<String>,
}

impl SkillTaxonomy {
    pub fn builtin() -> Self {
        let owned = |skills: &[&str]| -> Vec<String> {
            skills.iter().map(|s| s.to_string()).collect()
        };
        Self {
            core_technical: owned(&[
                "Python",
                "FastAPI",
                "React",
                "TypeScript",
                "PostgreSQL",
                "MongoDB",
            ]),
            infrastructure: owned(&["Docker", "Kubernetes", "AWS", "Linux"]),
            tools: owned(&["Git", "Redis"]),
            foundational: owned(&["HTML/CSS", "JavaScript", "REST APIs"]),
        }
    }

    /// Places each skill in the first tier that lists it; unlisted skills are foundational.
    /// Input order and casing are preserved inside each tier.
    pub fn categorize(&self, skills: &[String]) -> CategorizedSkills {
        let mut out = CategorizedSkills::default();
        for skill in skills {
            let bucket = if listed(&self.core_technical, skill) {
                &mut out.core
            } else if listed(&self.infrastructure, skill) {
                &mut out.infrastructure
            } else if listed(&self.tools, skill) {
                &mut out.tools
            } else {
                &mut out.foundational
            };
            bucket.push(skill.clone());
        }
        out
    }
}

fn listed(tier: &[String], skill: &str) -> bool {
    tier.iter().any(|s| s.eq_ignore_ascii_case(skill.trim()))
}
