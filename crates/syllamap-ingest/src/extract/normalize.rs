//! Text normalization — strips PDF/OCR artifacts while preserving the line
//! breaks and indentation that carry structural signal.

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
static PAGE_NUMBER_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\d+\s*$").unwrap());
static SPACE_BEFORE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());

/// Normalize raw document text. Total over any input, including empty.
///
/// Step order matters: later steps assume earlier ones ran.
pub fn normalize_text(raw: &str) -> String {
    // 1. Unify line-ending styles.
    let text = raw.replace("\r\n", "\n").replace('\r', "\n");

    // 2. Collapse pathological blank runs, keeping paragraph breaks.
    let text = BLANK_RUNS.replace_all(&text, "\n\n").into_owned();

    // 3. Drop standalone page-number lines. Removing a line can butt two
    //    blank runs together, so the collapse runs once more afterwards.
    let text = text
        .lines()
        .filter(|line| !PAGE_NUMBER_LINE.is_match(line))
        .collect::<Vec<_>>()
        .join("\n");
    let text = BLANK_RUNS.replace_all(&text, "\n\n").into_owned();

    // 4. Strip non-printable control characters.
    let text: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();

    // 5. No space before sentence punctuation.
    let text = SPACE_BEFORE_PUNCT.replace_all(&text, "$1").into_owned();

    // 6. Collapse whitespace runs within each line. Leading indentation
    //    stays: it is a subtopic signal downstream.
    let text = text
        .lines()
        .map(collapse_line)
        .collect::<Vec<_>>()
        .join("\n");

    text.trim().to_string()
}

fn collapse_line(line: &str) -> String {
    let body = line.trim_start();
    if body.is_empty() {
        return String::new();
    }
    let indent = &line[..line.len() - body.len()];
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    format!("{}{}", indent, collapsed)
}
