//! Per-field confidence heuristics.
//!
//! Every function is total and returns a value in `[0.0, 1.0]`. Scores are fixed tiers rather
//! than probabilities: they tell the caller how much of the expected shape was found.

use crate::parsing::models::{ConfidenceScores, EducationEntry, ExperienceEntry};
use crate::parsing::text::non_blank_lines;

const PHONE_CONTEXT_KEYWORDS: &[&str] = &["phone", "mobile", "contact", "tel"];

/// Raw extraction output the scorers look at.
pub struct ScoringInput<'a> {
    pub text: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub skill_count: usize,
    pub education: &'a [EducationEntry],
    pub experience: &'a [ExperienceEntry],
}

pub fn score_fields(input: &ScoringInput<'_>) -> ConfidenceScores {
    ConfidenceScores {
        name: name_confidence(input.name, input.text),
        email: email_confidence(input.email),
        phone: phone_confidence(input.phone, input.text),
        skills: skills_confidence(input.skill_count),
        education: education_confidence(input.education),
        experience: experience_confidence(input.experience),
    }
}

pub fn name_confidence(name: &str, text: &str) -> f64 {
    if name.is_empty() {
        return 0.0;
    }

    let is_first_line = non_blank_lines(text).first() == Some(&name);
    let words = name.split_whitespace().count();
    let short = (2..=3).contains(&words);

    match (is_first_line, short) {
        (true, true) if is_title_case(name) => 0.85,
        (true, _) => 0.70,
        (false, true) => 0.60,
        (false, false) => 0.40,
    }
}

pub fn email_confidence(email: &str) -> f64 {
    if email.is_empty() {
        0.10
    } else {
        0.95
    }
}

pub fn phone_confidence(phone: &str, text: &str) -> f64 {
    if phone.is_empty() {
        return 0.10;
    }
    if has_phone_context(phone, text) {
        0.90
    } else if phone.starts_with("+91") || phone.starts_with("91") {
        0.80
    } else {
        0.65
    }
}

pub fn skills_confidence(count: usize) -> f64 {
    match count {
        0 => 0.20,
        1..=3 => 0.55,
        4..=8 => 0.75,
        9..=15 => 0.85,
        _ => 0.90,
    }
}

pub fn education_confidence(entries: &[EducationEntry]) -> f64 {
    let Some(first) = entries.first() else {
        return 0.20;
    };
    let has_degree = !first.degree.is_empty();
    let has_institution = !first.institution.is_empty();
    let has_year = !first.year.is_empty();

    match (has_degree, has_institution, has_year) {
        (true, true, true) => 0.85,
        (true, true, false) => 0.70,
        (true, false, _) | (false, true, _) => 0.50,
        (false, false, _) => 0.30,
    }
}

pub fn experience_confidence(entries: &[ExperienceEntry]) -> f64 {
    let Some(first) = entries.first() else {
        return 0.20;
    };
    let has_role = !first.title.is_empty() && !first.company.is_empty();
    let has_duration = first.has_duration();
    let has_description = !first.description.is_empty();

    match (has_role, has_duration, has_description) {
        (true, true, true) => 0.85,
        (true, true, false) => 0.70,
        (true, false, _) => 0.55,
        (false, _, _) => 0.35,
    }
}

/// A contextual keyword sits earlier on the same line as the number.
fn has_phone_context(phone: &str, text: &str) -> bool {
    text.lines().any(|line| {
        line.rfind(phone).is_some_and(|pos| {
            let before = line[..pos].to_lowercase();
            PHONE_CONTEXT_KEYWORDS.iter().any(|kw| before.contains(kw))
        })
    })
}

/// Every cased run starts with an uppercase letter followed only by lowercase ones,
/// and at least one cased letter exists ("Jane Doe", "Mary-Kate O'Neil").
fn is_title_case(s: &str) -> bool {
    let mut prev_cased = false;
    let mut any_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            any_cased = true;
        } else {
            prev_cased = false;
        }
    }
    any_cased
}
