//! Name, email and phone extraction from the top of a resume.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::text::{char_len, non_blank_lines, starts_uppercase};

/// Section titles that open many resumes and are never the candidate's name.
const HEADER_LINES: &[&str] = &[
    "resume",
    "curriculum vitae",
    "cv",
    "profile",
    "personal information",
    "contact",
    "biodata",
];

const NAME_SCAN_LINES: usize = 10;

static TEN_DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{10}").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\b").unwrap()
});
/// Indian mobile number with a country code: `+91 98765 43210` style prefixes are kept.
static PREFIXED_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+91|\b91)[- \t]?[6-9]\d{9}\b").unwrap());
static BARE_PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[6-9]\d{9}\b").unwrap());

pub fn extract_name(text: &str) -> String {
    let lines = non_blank_lines(text);

    let candidate = lines.iter().take(NAME_SCAN_LINES).find(|line| {
        let lower = line.to_lowercase();
        if HEADER_LINES.contains(&lower.as_str()) {
            return false;
        }
        if line.contains('@') || TEN_DIGITS_RE.is_match(line) {
            return false;
        }
        char_len(line) < 50
            && line.split_whitespace().count() <= 5
            && starts_uppercase(line)
            && !line.chars().any(|c| c.is_ascii_digit())
    });

    candidate
        .or_else(|| lines.first())
        .map(|line| line.to_string())
        .unwrap_or_default()
}

pub fn extract_email(text: &str) -> String {
    EMAIL_RE
        .find(text)
        .map(|m| m.as_str())
        .filter(|email| char_len(email) < 100)
        .unwrap_or_default()
        .to_string()
}

/// Country-coded numbers win; otherwise the first bare 10-digit mobile number.
pub fn extract_phone(text: &str) -> String {
    if let Some(m) = PREFIXED_PHONE_RE.find(text) {
        return m.as_str().to_string();
    }

    BARE_PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|number| !number.starts_with("19") && !number.starts_with("20"))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_skips_header_and_contact_lines() {
        let text = "RESUME\njane.doe@example.com | 9876543210\nJane Doe\nSoftware Engineer";
        assert_eq!(extract_name(text), "Jane Doe");
    }

    #[test]
    fn test_name_rejects_lines_with_digits() {
        let text = "Flat 42 Baker Street\nPriya Sharma";
        assert_eq!(extract_name(text), "Priya Sharma");
    }

    #[test]
    fn test_name_falls_back_to_first_line() {
        let text = "john doe 2024 edition\nanother lowercase line";
        assert_eq!(extract_name(text), "john doe 2024 edition");
    }

    #[test]
    fn test_name_only_scans_first_ten_lines() {
        let mut text = String::new();
        for _ in 0..10 {
            text.push_str("lowercase filler\n");
        }
        text.push_str("Jane Doe\n");
        assert_eq!(extract_name(&text), "lowercase filler");
    }

    #[test]
    fn test_name_empty_text() {
        assert_eq!(extract_name("  \n \n"), "");
    }

    #[test]
    fn test_email_found() {
        let text = "Contact: jane.doe+jobs@mail.example.co.in, Bengaluru";
        assert_eq!(extract_email(text), "jane.doe+jobs@mail.example.co.in");
    }

    #[test]
    fn test_email_absent() {
        assert_eq!(extract_email("no address here @ all"), "");
    }

    #[test]
    fn test_email_too_long_rejected() {
        let local = "a".repeat(100);
        assert_eq!(extract_email(&format!("{local}@example.com")), "");
    }

    #[test]
    fn test_phone_with_country_code() {
        assert_eq!(extract_phone("Phone: +91 9876543210"), "+91 9876543210");
        assert_eq!(extract_phone("Mobile: 91-9876543210"), "91-9876543210");
    }

    #[test]
    fn test_phone_never_spans_lines() {
        let text = "Contact +91\n9876543210";
        assert_eq!(extract_phone(text), "9876543210");
    }

    #[test]
    fn test_phone_bare_number() {
        assert_eq!(extract_phone("Reach me at 9876543210 anytime"), "9876543210");
    }

    #[test]
    fn test_phone_rejects_non_mobile_numbers() {
        assert_eq!(extract_phone("Roll no 2019123456, ID 1234567890"), "");
        assert_eq!(extract_phone("98765432101234"), "");
    }
}
