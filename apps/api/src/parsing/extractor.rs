//! Runs every extraction pass over one document's text.
//!
//! The passes are independent: each reads only the text (skills also read the alias table),
//! so their order does not matter.

use crate::parsing::contact::{extract_email, extract_name, extract_phone};
use crate::parsing::education::extract_education;
use crate::parsing::experience::extract_experience;
use crate::parsing::models::{EducationEntry, ExperienceEntry};
use crate::parsing::projects::extract_projects;
use crate::reference::SkillAliasTable;

#[derive(Debug, Clone, Default)]
pub struct ExtractedFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<String>,
}

pub fn extract_fields(text: &str, aliases: &SkillAliasTable) -> ExtractedFields {
    ExtractedFields {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text, aliases),
        education: extract_education(text),
        experience: extract_experience(text),
        projects: extract_projects(text),
    }
}

/// Canonical skill names found in `text`, alphabetically sorted.
pub fn extract_skills(text: &str, aliases: &SkillAliasTable) -> Vec<String> {
    aliases.canonicalize(text).into_iter().collect()
}
