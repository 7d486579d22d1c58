//! Years of experience estimated from parsed experience durations.

use chrono::{Datelike, NaiveDate};

use crate::parsing::ExperienceEntry;

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Whole years across every entry whose duration reads `<Month> <YYYY> - <Month> <YYYY>` or
/// `<Month> <YYYY> - Present|Current`. Other durations are skipped.
pub fn estimate_experience_years(entries: &[ExperienceEntry], today: NaiveDate) -> u32 {
    let months: i64 = entries
        .iter()
        .filter_map(|entry| parse_duration(&entry.duration, today))
        .map(|(start, end)| months_between(start, end))
        .fold(0, i64::saturating_add);
    (months / 12).clamp(0, i64::from(u32::MAX)) as u32
}

fn parse_duration(duration: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = duration.split_once(" - ")?;
    let start = parse_month_year(start)?;
    let end = match end.trim().to_ascii_lowercase().as_str() {
        "present" | "current" => today,
        other => parse_month_year(other)?,
    };
    Some((start, end))
}

fn parse_month_year(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let month_word = parts.next()?.to_ascii_lowercase();
    let year_word = parts.next()?;
    // Same year shape the extractor emits: four digits, 19xx or 20xx.
    if year_word.len() != 4
        || !year_word.bytes().all(|b| b.is_ascii_digit())
        || !(year_word.starts_with("19") || year_word.starts_with("20"))
    {
        return None;
    }
    let year: i32 = year_word.parse().ok()?;
    let month = MONTHS
        .iter()
        .position(|m| month_word.starts_with(m))
        .map(|idx| idx as u32 + 1)?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Inclusive month count: January through December of one year is 12 months.
fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    (years * 12 + months + 1).max(0)
}
