//! Per-line heuristics: the main-topic and subtopic predicates plus the
//! topic-name cleaner. Each predicate is a pure function of a single line
//! with no lookback or lookahead; the rules inside each predicate are
//! independent and OR-combined.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading numbering or unit markers: "3. ", "4) ", "Unit 2", "Chapter 10".
static NUMBERING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\d+[.)]\s|(?:unit|chapter|module|lesson|topic)\s+\d+\b)").unwrap()
});

/// Leading bullet or sub-numbering markers: "- ", "• ", "1.2", "a)", "(b)", "iv.".
static SUB_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[-•*▪◦]|\d+\.\d+|\([a-z]\)|[a-z]\)|[ivx]+[.)])").unwrap()
});

/// Markers stripped from the front of a topic name, longest form first.
static LEAD_NUMBERING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:\d+\.\d+|\d+[.)]|(?:unit|chapter|module|lesson|topic)\s+\d+)[\s.:)\-]*")
        .unwrap()
});

static LEAD_BULLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[-•*▪◦]|\([a-z]\)|[a-z]\)|[ivx]+[.)])\s*").unwrap()
});

/// Phrases that open a main-topic line.
const TOPIC_PHRASES: &[&str] = &[
    "introduction to",
    "overview of",
    "fundamentals of",
    "basics of",
    "advanced",
    "understanding",
    "exploring",
    "concepts of",
];

/// Indicator words that open a subtopic line.
const SUBTOPIC_INDICATORS: &[&str] = &[
    "definition",
    "types",
    "examples",
    "applications",
    "properties",
    "characteristics",
    "features",
    "methods",
    "techniques",
    "principles",
    "components",
    "elements",
    "factors",
    "advantages",
    "disadvantages",
];

/// Does this line start a new top-level section of the outline?
pub fn is_main_topic(line: &str) -> bool {
    let line = line.trim();
    let len = line.chars().count();
    if !(5..=150).contains(&len) {
        return false;
    }

    NUMBERING.is_match(line) || is_title_shaped(line, len) || starts_with_topic_phrase(line)
}

/// Does this line elaborate the currently open main topic?
pub fn is_subtopic(line: &str) -> bool {
    let trimmed = line.trim();
    let len = trimmed.chars().count();
    if !(5..=120).contains(&len) {
        return false;
    }

    SUB_MARKER.is_match(trimmed)
        || starts_with_indicator(trimmed)
        || line.starts_with("    ")
        || line.starts_with('\t')
}

/// Title case with 2–15 words where every word longer than two characters is
/// capitalized, or a shouting all-caps heading of moderate length.
fn is_title_shaped(line: &str, len: usize) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    if (2..=15).contains(&words.len()) {
        let significant: Vec<&&str> = words.iter().filter(|w| w.chars().count() > 2).collect();
        if !significant.is_empty()
            && significant
                .iter()
                .all(|w| w.chars().next().map(char::is_uppercase).unwrap_or(false))
        {
            return true;
        }
    }

    is_all_upper(line) && len > 10 && len < 80
}

fn starts_with_topic_phrase(line: &str) -> bool {
    let lower = line.to_lowercase();
    TOPIC_PHRASES.iter().any(|p| lower.starts_with(p))
}

fn starts_with_indicator(line: &str) -> bool {
    let lower = line.to_lowercase();
    SUBTOPIC_INDICATORS.iter().any(|w| lower.starts_with(w))
}

fn is_all_upper(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

/// Clean a raw outline line into a presentable topic name.
///
/// Strips stacked leading markers until stable so that cleaning is
/// idempotent: cleaning an already-clean name is a no-op.
pub fn clean_topic_name(text: &str) -> String {
    let mut name = text.trim().to_string();

    loop {
        let before = name.clone();
        name = LEAD_NUMBERING.replace(&name, "").into_owned();
        name = LEAD_BULLET.replace(&name, "").into_owned();
        name = name.trim().to_string();
        if name == before {
            break;
        }
    }

    // Separator punctuation at the edges; trailing runs also cover the
    // comma/semicolon/colon case.
    let name = name
        .trim_start_matches(|c: char| matches!(c, ':' | '-' | '–' | '—') || c.is_whitespace())
        .trim_end_matches(|c: char| {
            matches!(c, ':' | '-' | '–' | '—' | ',' | ';') || c.is_whitespace()
        });

    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");

    if is_all_upper(&name) && name.chars().count() > 10 {
        return title_case(&name);
    }
    name
}

/// Capitalize the first letter of every word, lower-casing the rest.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
