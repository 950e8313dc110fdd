//! Course title recovery from the document header.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CourseInfo;

/// Title used when no pattern matches.
pub const FALLBACK_TITLE: &str = "Course Overview";

/// How many characters of the document head are searched for a title.
const HEAD_WINDOW: usize = 500;

/// Maximum title length.
const MAX_TITLE_CHARS: usize = 100;

/// Title-shaped patterns, most explicit first. The first match wins.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Explicit marker: "Course: Data Structures", "Subject - Physics"
        Regex::new(r"(?im)^(?:course|subject|module)(?:\s+(?:name|title|code))?\s*[:\-]\s*(\S[^\n]*)")
            .unwrap(),
        // Standalone line ending in a roman numeral or 3-digit code:
        // "Computer Networks II", "Database Systems 301"
        Regex::new(r"(?m)^([A-Z][A-Za-z&]*(?:\s+[A-Za-z0-9&]+){0,6}\s+(?:[IVX]{1,5}|\d{3}))\s*$")
            .unwrap(),
        // Standalone line ending in a level keyword: "Database Fundamentals"
        Regex::new(
            r"(?m)^([A-Z][A-Za-z&]*(?:\s+[A-Za-z&]+){0,6}\s+(?:Fundamentals|Introduction|Basics|Essentials|Principles))\s*$",
        )
        .unwrap(),
    ]
});

/// Best-effort single pass over the head of the normalized text.
/// Always returns a `CourseInfo`; the title falls back to a fixed placeholder.
pub fn extract_course_info(text: &str) -> CourseInfo {
    let head = head_window(text);

    let title = TITLE_PATTERNS
        .iter()
        .find_map(|re| {
            re.captures(head)
                .and_then(|cap| cap.get(1))
                .map(|m| truncate_chars(m.as_str().trim(), MAX_TITLE_CHARS))
        })
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    CourseInfo {
        title,
        description: "Automatically generated study outline for this course".to_string(),
    }
}

fn head_window(text: &str) -> &str {
    match text.char_indices().nth(HEAD_WINDOW) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_marker_wins() {
        let info = extract_course_info("Course: Data Structures and Algorithms\nSpring term\n");
        assert_eq!(info.title, "Data Structures and Algorithms");
    }

    #[test]
    fn test_marker_with_dash() {
        let info = extract_course_info("Subject - Operating Systems\n");
        assert_eq!(info.title, "Operating Systems");
    }

    #[test]
    fn test_roman_numeral_heading() {
        let info = extract_course_info("Computer Networks II\nLecture schedule follows.\n");
        assert_eq!(info.title, "Computer Networks II");
    }

    #[test]
    fn test_course_code_heading() {
        let info = extract_course_info("Database Systems 301\nWeekly plan below.\n");
        assert_eq!(info.title, "Database Systems 301");
    }

    #[test]
    fn test_level_keyword_heading() {
        let info = extract_course_info("Machine Learning Fundamentals\nassessment details\n");
        assert_eq!(info.title, "Machine Learning Fundamentals");
    }

    #[test]
    fn test_fallback_title() {
        let info = extract_course_info("just some plain notes about nothing in particular");
        assert_eq!(info.title, FALLBACK_TITLE);
    }

    #[test]
    fn test_title_truncated_to_100_chars() {
        let long = format!("Course: {}", "Very Long Name ".repeat(20));
        let info = extract_course_info(&long);
        assert_eq!(info.title.chars().count(), 100);
    }
}
