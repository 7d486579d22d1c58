//! Work experience entries.
//!
//! Same positional pairing as education: titles, companies and date ranges are matched
//! independently and zipped by index. Bullets are read from the lines right below the
//! company name.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::parsing::models::{ExperienceEntry, DURATION_NOT_SPECIFIED};
use crate::parsing::text::{char_len, is_bullet, strip_bullet};

const MAX_BULLETS: usize = 5;
/// Lines after the company line that may hold its bullets.
const BULLET_WINDOW: usize = 9;
const MIN_BULLET_CHARS: usize = 11;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:Software Engineer|Developer|Intern|Analyst|Manager|Lead|Architect|Consultant|Designer|Trainee)[\w \t]*",
    )
    .unwrap()
});
static COMPANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b[A-Z][\w&.]*(?:[ \t]+[A-Z&][\w&.]*)*[ \t]+(?i:Pvt\.?[ \t]*Ltd|Inc|Corp|Corporation|Company|Technologies|Systems|Solutions|Services)\b\.?",
    )
    .unwrap()
});
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\.?[ \t]+((?:19|20)\d{2})[ \t]*[-–—][ \t]*(?:((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\.?[ \t]+((?:19|20)\d{2})|(present|current))\b",
    )
    .unwrap()
});

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let titles: Vec<&str> = TITLE_RE.find_iter(text).map(|m| m.as_str().trim()).collect();
    let companies: Vec<&str> = COMPANY_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .collect();
    let durations: Vec<String> = DATE_RANGE_RE.captures_iter(text).map(format_duration).collect();

    let lines: Vec<&str> = text.lines().collect();

    titles
        .iter()
        .zip(companies.iter())
        .enumerate()
        .map(|(i, (title, company))| ExperienceEntry {
            title: title.to_string(),
            company: company.to_string(),
            duration: durations
                .get(i)
                .cloned()
                .unwrap_or_else(|| DURATION_NOT_SPECIFIED.to_string()),
            description: extract_responsibilities(&lines, company),
        })
        .collect()
}

/// "June 2025 - Present", "Jan 2023 - Dec 2023".
fn format_duration(caps: Captures<'_>) -> String {
    let start = format!("{} {}", &caps[1], &caps[2]);
    let end = match (caps.get(3), caps.get(4), caps.get(5)) {
        (Some(month), Some(year), _) => format!("{} {}", month.as_str(), year.as_str()),
        (_, _, Some(word)) if word.as_str().eq_ignore_ascii_case("current") => "Current".into(),
        _ => "Present".into(),
    };
    format!("{start} - {end}")
}

/// Bullet lines within the window below the first line mentioning `company`.
fn extract_responsibilities(lines: &[&str], company: &str) -> Vec<String> {
    let needle = company.to_lowercase();
    let Some(company_idx) = lines
        .iter()
        .position(|line| line.to_lowercase().contains(&needle))
    else {
        return Vec::new();
    };

    let end = (company_idx + 1 + BULLET_WINDOW).min(lines.len());
    lines[(company_idx + 1).min(end)..end]
        .iter()
        .map(|line| line.trim())
        .filter(|line| is_bullet(line))
        .map(strip_bullet)
        .filter(|bullet| char_len(bullet) >= MIN_BULLET_CHARS)
        .take(MAX_BULLETS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_JOBS: &str = "\
EXPERIENCE
Software Engineer
Acme Technologies
June 2025 - Present
- Built REST APIs serving 2M requests per day
• Migrated the billing service to Kubernetes
- Fixed bugs
Data Analyst Intern
Globex Solutions Pvt Ltd
Jan 2023 - Dec 2023
";

    #[test]
    fn test_entries_paired_by_position() {
        let entries = extract_experience(TWO_JOBS);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Software Engineer");
        assert_eq!(entries[0].company, "Acme Technologies");
        assert_eq!(entries[0].duration, "June 2025 - Present");
        assert_eq!(entries[1].title, "Analyst Intern");
        assert_eq!(entries[1].company, "Globex Solutions Pvt Ltd");
        assert_eq!(entries[1].duration, "Jan 2023 - Dec 2023");
    }

    #[test]
    fn test_bullets_below_company() {
        let entries = extract_experience(TWO_JOBS);
        assert_eq!(
            entries[0].description,
            vec![
                "Built REST APIs serving 2M requests per day",
                "Migrated the billing service to Kubernetes",
            ]
        );
        assert!(entries[1].description.is_empty());
    }

    #[test]
    fn test_missing_dates_use_sentinel() {
        let entries = extract_experience("Developer\nInitech Systems\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].duration, DURATION_NOT_SPECIFIED);
        assert!(!entries[0].has_duration());
    }

    #[test]
    fn test_title_without_company_yields_nothing() {
        assert!(extract_experience("Freelance Developer\nSelf employed").is_empty());
    }

    #[test]
    fn test_bullets_capped_at_five() {
        let mut text = String::from("Consultant\nWayne Enterprises Inc\n");
        for i in 0..8 {
            text.push_str(&format!("- Delivered engagement number {i}\n"));
        }
        let entries = extract_experience(&text);
        assert_eq!(entries[0].company, "Wayne Enterprises Inc");
        assert_eq!(entries[0].description.len(), MAX_BULLETS);
    }

    #[test]
    fn test_current_end_word() {
        let entries = extract_experience("Designer\nPixel Studio Company\nMar 2021 - current");
        assert_eq!(entries[0].duration, "Mar 2021 - Current");
    }
}
