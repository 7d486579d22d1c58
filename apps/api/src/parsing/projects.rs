use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::text::{char_len, starts_uppercase, strip_bullet};

const MAX_PROJECTS: usize = 5;

static PROJECTS_HEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*projects?\b").unwrap());
static NEXT_SECTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^[ \t]*(?:education|experience|skills)\b").unwrap());

/// Project titles from the PROJECTS section, which runs until the next
/// EDUCATION / EXPERIENCE / SKILLS header or the end of the text.
pub fn extract_projects(text: &str) -> Vec<String> {
    let Some(header) = PROJECTS_HEADER_RE.find(text) else {
        return Vec::new();
    };

    // Body starts on the line after the header.
    let body_start = text[header.end()..]
        .find('\n')
        .map(|offset| header.end() + offset + 1)
        .unwrap_or(text.len());
    let body_end = NEXT_SECTION_RE
        .find_at(text, body_start)
        .map(|m| m.start())
        .unwrap_or(text.len());

    text[body_start..body_end.max(body_start)]
        .lines()
        .map(str::trim)
        .filter(|line| {
            starts_uppercase(line)
                && char_len(line) < 80
                && !line.to_lowercase().starts_with("project")
        })
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .take(MAX_PROJECTS)
        .map(str::to_string)
        .collect()
}
