//! Text in, `ParsedProfile` out. Always returns a profile; failures degrade to the empty one.

use tracing::info;

use crate::parsing::confidence::{score_fields, ScoringInput};
use crate::parsing::document::DocumentKind;
use crate::parsing::extractor::extract_fields;
use crate::parsing::models::{ParsedProfile, UNKNOWN_CANDIDATE};
use crate::reference::SkillAliasTable;

/// `filename` identifies which upstream extractor produced `text`; unsupported kinds and
/// blank text short-circuit to [`ParsedProfile::empty`].
pub fn parse_profile(text: &str, filename: &str, aliases: &SkillAliasTable) -> ParsedProfile {
    if DocumentKind::from_filename(filename) == DocumentKind::Unsupported {
        info!("Unsupported document type: {filename:?}");
        return ParsedProfile::empty();
    }
    if text.trim().is_empty() {
        info!("No extractable text in {filename:?}");
        return ParsedProfile::empty();
    }

    let fields = extract_fields(text, aliases);
    let confidence_scores = score_fields(&ScoringInput {
        text,
        name: &fields.name,
        email: &fields.email,
        phone: &fields.phone,
        skill_count: fields.skills.len(),
        education: &fields.education,
        experience: &fields.experience,
    });

    let name = if fields.name.is_empty() {
        UNKNOWN_CANDIDATE.to_string()
    } else {
        fields.name
    };

    info!(
        "Parsed {name} | {} skills | {} education | {} experience",
        fields.skills.len(),
        fields.education.len(),
        fields.experience.len()
    );

    ParsedProfile {
        name,
        email: fields.email,
        phone: fields.phone,
        skills: fields.skills,
        education: fields.education,
        experience: fields.experience,
        projects: fields.projects,
        confidence_scores,
    }
}
