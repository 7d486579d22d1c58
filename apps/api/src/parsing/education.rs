//! Education entries.
//!
//! Degree, institution and year-range tokens are collected by independent passes over the
//! whole text and paired by position: the i-th degree goes with the i-th institution and the
//! i-th year range. Resumes that list these in a different order will be mis-paired.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::models::EducationEntry;
use crate::reference::aliases::contains_whole_word;

const DEFAULT_FIELD: &str = "Computer Science";

/// Checked in order; the first field with a keyword present wins.
const FIELD_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Computer Science",
        &["computer science", "cs", "cse", "information technology", "it"],
    ),
    ("Electronics", &["electronics", "ece", "electrical"]),
    ("Mechanical", &["mechanical", "me"]),
    ("Civil", &["civil", "ce"]),
    ("Chemical", &["chemical"]),
    ("Business", &["business", "mba", "management"]),
    ("Data Science", &["data science", "analytics"]),
];

static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b((?:B|M)\.?(?:Tech|TECH)|(?:B|M)\.?Sc|BCA|MCA|MBA|Ph\.?D\.?|PHD|(?:B|M)\.E\.?|(?:B|M)\.A\.?)(?:\W|$)",
    )
    .unwrap()
});
static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:[A-Z][\w&.]*[ \t]+){0,3}(?i:NIT|IIT|IIIT|BITS|VIT|SRM|Amity|Manipal|University|College|Institute|School)\b(?:[ \t]*,?[ \t]+(?:of|and|for|the|&|[A-Z][\w&.]*)){0,6}",
    )
    .unwrap()
});
static YEAR_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:19|20)\d{2})[ \t]*[-–—][ \t]*((?:19|20)\d{2}|[Pp]resent|[Cc]urrent)\b")
        .unwrap()
});
static CGPA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:CGPA|GPA)[: \t]+(\d+(?:\.\d+)?)").unwrap());
static PERCENTAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{2,3}(?:\.\d+)?)[ \t]*%").unwrap());

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    let degrees: Vec<&str> = DEGREE_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .collect();
    let institutions: Vec<&str> = INSTITUTION_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().trim_end_matches(','))
        .collect();
    let years: Vec<String> = YEAR_RANGE_RE
        .captures_iter(text)
        .map(|c| format!("{}-{}", &c[1], &c[2]))
        .collect();

    let pairs = degrees.len().min(institutions.len());
    if pairs == 0 {
        return Vec::new();
    }

    let field = extract_field_of_study(text);
    let mut entries: Vec<EducationEntry> = (0..pairs)
        .map(|i| EducationEntry {
            degree: degrees[i].to_string(),
            institution: institutions[i].to_string(),
            field_of_study: field.to_string(),
            year: years.get(i).cloned().unwrap_or_default(),
            cgpa: None,
            percentage: None,
        })
        .collect();

    // A single grade is reported per resume; it belongs to the first (usually latest) entry.
    let first = &mut entries[0];
    first.cgpa = first_number(&CGPA_RE, text);
    if first.cgpa.is_none() {
        first.percentage = first_number(&PERCENTAGE_RE, text);
    }

    entries
}

pub fn extract_field_of_study(text: &str) -> &'static str {
    let lowered = text.to_lowercase();
    FIELD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| contains_whole_word(&lowered, kw)))
        .map(|(field, _)| *field)
        .unwrap_or(DEFAULT_FIELD)
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_DEGREES: &str = "\
EDUCATION
M.Tech in Data Science
IIT Bombay
2022 - 2024
CGPA: 8.7
B.Tech, Electronics
NIT Trichy
2018 - 2022
";

    #[test]
    fn test_entries_paired_by_position() {
        let entries = extract_education(TWO_DEGREES);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].degree, "M.Tech");
        assert_eq!(entries[0].institution, "IIT Bombay");
        assert_eq!(entries[0].year, "2022-2024");
        assert_eq!(entries[1].degree, "B.Tech");
        assert_eq!(entries[1].institution, "NIT Trichy");
        assert_eq!(entries[1].year, "2018-2022");
    }

    #[test]
    fn test_grade_attached_to_first_entry_only() {
        let entries = extract_education(TWO_DEGREES);
        assert_eq!(entries[0].cgpa, Some(8.7));
        assert_eq!(entries[1].cgpa, None);
        assert_eq!(entries[0].percentage, None);
    }

    #[test]
    fn test_percentage_used_without_cgpa() {
        let text = "B.Sc Physics\nUniversity of Mumbai\n2015 - 2018\nScored 82.5% overall";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "University of Mumbai");
        assert_eq!(entries[0].cgpa, None);
        assert_eq!(entries[0].percentage, Some(82.5));
    }

    #[test]
    fn test_present_year_range() {
        let text = "MBA\nAmity Business School\n2023 - Present";
        let entries = extract_education(text);
        assert_eq!(entries[0].year, "2023-Present");
        assert_eq!(entries[0].institution, "Amity Business School");
    }

    #[test]
    fn test_grade_label_and_value_on_one_line() {
        let text = "B.Sc Physics\nUniversity of Mumbai\nCGPA\n8.1\n2015 - 2018";
        let entries = extract_education(text);
        assert_eq!(entries[0].cgpa, None);
        assert_eq!(entries[0].percentage, None);
    }

    #[test]
    fn test_missing_year_leaves_empty_string() {
        let entries = extract_education("BCA from Delhi University");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].institution, "Delhi University");
        assert_eq!(entries[0].year, "");
    }

    #[test]
    fn test_no_institution_means_no_entries() {
        assert!(extract_education("B.Tech dropout, self taught").is_empty());
    }

    #[test]
    fn test_degree_not_matched_inside_words() {
        assert!(extract_education("Became a member of the college band").is_empty());
    }

    #[test]
    fn test_field_of_study_order_and_default() {
        assert_eq!(extract_field_of_study("B.Tech, CSE"), "Computer Science");
        assert_eq!(extract_field_of_study("Mechanical Engineering"), "Mechanical");
        assert_eq!(extract_field_of_study("Studied analytics"), "Data Science");
        assert_eq!(extract_field_of_study("History of art"), DEFAULT_FIELD);
        // Whole words only: "ce" inside "conscience" is not a hit.
        assert_eq!(extract_field_of_study("A clear conscience"), DEFAULT_FIELD);
    }
}
