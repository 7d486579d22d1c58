//! Line helpers shared by the extraction passes.

use once_cell::sync::Lazy;
use regex::Regex;

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-•·*◦▪]\s+").unwrap());

/// Trimmed, non-blank lines in document order.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

pub fn is_bullet(line: &str) -> bool {
    BULLET_RE.is_match(line)
}

/// Removes one leading bullet marker (and the whitespace after it).
pub fn strip_bullet(line: &str) -> &str {
    match BULLET_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

pub fn starts_uppercase(line: &str) -> bool {
    line.chars().next().is_some_and(char::is_uppercase)
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
