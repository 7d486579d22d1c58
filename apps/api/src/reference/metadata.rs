//! Per-skill learning metadata: how long a skill takes, how hard it is, what it builds on.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Sort rank, easiest first.
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMetadata {
    #[serde(default = "default_learning_months")]
    pub learning_months: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

fn default_learning_months() -> u32 {
    2
}

impl Default for SkillMetadata {
    fn default() -> Self {
        Self {
            learning_months: default_learning_months(),
            difficulty: Difficulty::Medium,
            prerequisites: Vec::new(),
        }
    }
}

/// Returned for any skill the table does not know.
static UNKNOWN_SKILL: Lazy<SkillMetadata> = Lazy::new(SkillMetadata::default);

/// Case-insensitive skill → metadata lookup.
#[derive(Debug, Clone, Default)]
pub struct SkillMetadataTable {
    entries: HashMap<String, SkillMetadata>,
}

impl SkillMetadataTable {
    pub fn builtin() -> Self {
        use Difficulty::*;
        let rows: [(&str, u32, Difficulty, &[&str]); 13] = [
            ("Python", 3, Medium, &[]),
            ("FastAPI", 2, Easy, &["Python"]),
            ("React", 3, Medium, &["JavaScript"]),
            ("TypeScript", 2, Medium, &["JavaScript"]),
            // Docker is treated as an entry-level skill so it can open a roadmap.
            ("Docker", 2, Medium, &[]),
            ("Kubernetes", 4, Hard, &["Docker"]),
            ("PostgreSQL", 2, Medium, &[]),
            ("MongoDB", 2, Easy, &[]),
            ("AWS", 4, Hard, &["Linux"]),
            ("Redis", 1, Easy, &[]),
            ("GraphQL", 2, Medium, &["REST APIs"]),
            ("JavaScript", 3, Medium, &[]),
            ("Linux", 2, Medium, &[]),
        ];

        let entries = rows
            .into_iter()
            .map(|(skill, learning_months, difficulty, prerequisites)| {
                (
                    skill.to_lowercase(),
                    SkillMetadata {
                        learning_months,
                        difficulty,
                        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn from_map(map: BTreeMap<String, SkillMetadata>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(skill, meta)| (skill.trim().to_lowercase(), meta))
                .collect(),
        }
    }

    /// Metadata for `skill`, or the default (2 months, medium, no prerequisites).
    pub fn lookup(&self, skill: &str) -> &SkillMetadata {
        self.entries
            .get(skill.trim().to_lowercase().as_str())
            .unwrap_or(&UNKNOWN_SKILL)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
