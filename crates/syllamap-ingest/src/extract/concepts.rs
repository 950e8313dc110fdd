//! Key-concept mining: definition-shaped statements pulled from the whole
//! text, deduplicated globally across all patterns.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::classify::title_case;
use super::Concept;

/// Maximum concepts returned to the caller.
pub const MAX_CONCEPTS: usize = 10;
/// Scanning stops once this many concepts have been accepted.
const SCAN_CAP: usize = 15;
/// Maximum description length after truncation.
const MAX_DESCRIPTION_CHARS: usize = 150;

/// Definition templates, tried in order. The phrase is 1–4 words; the
/// description runs up to, not including, a sentence terminator.
static DEFINITION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b([A-Za-z][A-Za-z0-9'-]*(?:\s+[A-Za-z0-9'-]+){0,3})\s+is\s+((?:a|an|the)\s+[^.!?\n]+)")
            .unwrap(),
        Regex::new(r"(?i)\b([A-Za-z][A-Za-z0-9'-]*(?:\s+[A-Za-z0-9'-]+){0,3})\s+refers\s+to\s+([^.!?\n]+)")
            .unwrap(),
        Regex::new(r"(?i)\b([A-Za-z][A-Za-z0-9'-]*(?:\s+[A-Za-z0-9'-]+){0,3})\s+means\s+([^.!?\n]+)")
            .unwrap(),
        Regex::new(r"(?m)^\s*([A-Za-z][A-Za-z0-9'-]*(?:\s+[A-Za-z0-9'-]+){0,3})\s*:\s+([A-Z][^.!?\n]{9,})")
            .unwrap(),
    ]
});

/// Phrases too generic to name a concept.
const STOP_WORDS: &[&str] = &["this", "that", "these", "those", "it", "the", "a", "an"];

/// Mine deduplicated concept definitions from normalized text.
pub fn extract_key_concepts(text: &str) -> Vec<Concept> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut accepted: Vec<Concept> = Vec::new();

    'patterns: for re in DEFINITION_PATTERNS.iter() {
        for cap in re.captures_iter(text) {
            if accepted.len() >= SCAN_CAP {
                break 'patterns;
            }
            let phrase = match cap.get(1) {
                Some(m) => m.as_str().trim(),
                None => continue,
            };
            let description = match cap.get(2) {
                Some(m) => m.as_str().trim(),
                None => continue,
            };

            let name = title_case(phrase);
            if name.chars().count() < 3 {
                continue;
            }
            let key = name.to_lowercase();
            if STOP_WORDS.contains(&key.as_str()) || seen.contains(&key) {
                continue;
            }
            if description.chars().count() < 10 {
                continue;
            }

            seen.insert(key);
            accepted.push(Concept {
                name,
                description: truncate_chars(description, MAX_DESCRIPTION_CHARS),
            });
        }
    }

    accepted.truncate(MAX_CONCEPTS);
    accepted
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_a_pattern() {
        let concepts =
            extract_key_concepts("A stack is a linear data structure that follows LIFO order.");
        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].name, "A Stack");
        assert!(concepts[0].description.starts_with("a linear data structure"));
    }

    #[test]
    fn test_refers_to_and_means_patterns() {
        let text = "Normalization refers to organizing data to reduce redundancy. \
                    Latency means the delay before a transfer of data begins.";
        let concepts = extract_key_concepts(text);
        let names: Vec<&str> = concepts.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Normalization"));
        assert!(names.contains(&"Latency"));
    }

    #[test]
    fn test_colon_pattern() {
        let concepts = extract_key_concepts("Deadlock: Processes blocked waiting on each other\n");
        assert_eq!(concepts.len(), 1);
        assert_eq!(concepts[0].name, "Deadlock");
    }

    #[test]
    fn test_stop_words_rejected() {
        let concepts = extract_key_concepts("This is a very important idea to remember always.");
        assert!(concepts.iter().all(|c| c.name != "This"));
    }

    #[test]
    fn test_dedup_across_patterns() {
        let text = "A queue is a first-in first-out collection of elements. \
                    A queue means a waiting line of pending work items.";
        let concepts = extract_key_concepts(text);
        assert_eq!(
            concepts.iter().filter(|c| c.name == "A Queue").count(),
            1
        );
    }

    #[test]
    fn test_short_description_rejected() {
        let concepts = extract_key_concepts("Tree means a graph.");
        assert!(concepts.is_empty());
    }

    #[test]
    fn test_description_truncated() {
        let text = format!("An index is a {} structure.", "very ".repeat(60));
        let concepts = extract_key_concepts(&text);
        assert_eq!(concepts[0].description.chars().count(), 150);
    }

    #[test]
    fn test_result_capped_at_ten() {
        let mut text = String::new();
        for i in 0..20 {
            text.push_str(&format!(
                "Widget{} is a component used for demonstration number {}. ",
                i, i
            ));
        }
        let concepts = extract_key_concepts(&text);
        assert_eq!(concepts.len(), MAX_CONCEPTS);
    }
}
