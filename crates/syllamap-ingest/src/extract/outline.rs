//! Topic-tree assembly: a single left-to-right scan over classified lines
//! with explicit builder state, plus fallback strategies for documents whose
//! structure only shows up in flowed text.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::classify::{clean_topic_name, is_main_topic, is_subtopic, title_case};
use super::Topic;

/// Maximum committed topics per document.
pub const MAX_TOPICS: usize = 15;
/// Maximum subtopics attached to one topic.
pub const MAX_SUBTOPICS: usize = 8;
/// Maximum topics recovered by the heading-line fallback.
const MAX_HEADING_FALLBACK: usize = 10;

/// Numbered sections embedded in flowed text: "1. Advanced Network Design".
static NUMBERED_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\.\s+([A-Z][^.\n]{9,99})").unwrap());

/// Keyword → canned description, scanned in order against the lower-cased
/// topic name; the first containment wins.
const DESCRIPTION_KEYWORDS: &[(&str, &str)] = &[
    ("introduction", "Foundational material introducing the subject area"),
    ("fundamental", "Core principles that later units build upon"),
    ("advanced", "Advanced treatment building on earlier material"),
    ("application", "Practical applications and worked use cases"),
    ("theory", "Theoretical background and formal underpinnings"),
    ("practical", "Hands-on practice and applied exercises"),
];

/// Build the topic tree for a normalized document.
pub fn build_topic_tree(text: &str) -> Vec<Topic> {
    let mut builder = OutlineBuilder::new();
    for line in text.lines() {
        builder.observe_line(line);
    }
    let tree = builder.finish();
    if !tree.is_empty() {
        return tree;
    }

    debug!("line scan found no topics, trying fallback extraction");
    let numbered = numbered_section_topics(text);
    if !numbered.is_empty() {
        return numbered;
    }
    heading_line_topics(text)
}

/// Scan state: the currently open topic and the committed tree.
struct OutlineBuilder {
    tree: Vec<Topic>,
    current: Option<Topic>,
}

impl OutlineBuilder {
    fn new() -> Self {
        Self {
            tree: Vec::new(),
            current: None,
        }
    }

    fn observe_line(&mut self, line: &str) {
        if line.trim().chars().count() < 5 {
            return;
        }

        if is_main_topic(line) {
            self.commit_current();
            let name = title_case(&clean_topic_name(line));
            self.current = Some(Topic {
                description: describe_topic(&name),
                name,
                subtopics: Vec::new(),
            });
        } else if let Some(topic) = self.current.as_mut() {
            if is_subtopic(line) {
                let sub = title_case(&clean_topic_name(line));
                let len = sub.chars().count();
                if len > 5
                    && len < 100
                    && topic.subtopics.len() < MAX_SUBTOPICS
                    && !topic.subtopics.contains(&sub)
                {
                    topic.subtopics.push(sub);
                }
            }
        }
    }

    fn commit_current(&mut self) {
        if let Some(mut topic) = self.current.take() {
            if self.tree.len() >= MAX_TOPICS {
                return;
            }
            topic.subtopics.truncate(MAX_SUBTOPICS);
            if self.tree.iter().any(|t| t.name == topic.name) {
                return;
            }
            self.tree.push(topic);
        }
    }

    fn finish(mut self) -> Vec<Topic> {
        self.commit_current();
        self.tree
    }
}

/// Generate a short description for a topic name.
fn describe_topic(name: &str) -> String {
    let lower = name.to_lowercase();
    for (keyword, description) in DESCRIPTION_KEYWORDS {
        if lower.contains(keyword) {
            return (*description).to_string();
        }
    }
    format!("Key concepts and learning objectives for {}", name)
}

/// Fallback (a): numbered sections anywhere in the text, even mid-line.
fn numbered_section_topics(text: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    for cap in NUMBERED_SECTION.captures_iter(text) {
        if topics.len() >= MAX_TOPICS {
            break;
        }
        if let Some(m) = cap.get(1) {
            let name = title_case(&clean_topic_name(m.as_str()));
            if topics.iter().any(|t| t.name == name) {
                continue;
            }
            topics.push(Topic {
                description: describe_topic(&name),
                name,
                subtopics: Vec::new(),
            });
        }
    }
    topics
}

/// Fallback (b): standalone heading-shaped lines.
fn heading_line_topics(text: &str) -> Vec<Topic> {
    let mut topics: Vec<Topic> = Vec::new();
    for line in text.lines() {
        if topics.len() >= MAX_HEADING_FALLBACK {
            break;
        }
        let trimmed = line.trim();
        if !looks_like_heading(trimmed) {
            continue;
        }
        let name = title_case(&clean_topic_name(trimmed));
        if topics.iter().any(|t| t.name == name) {
            continue;
        }
        topics.push(Topic {
            description: describe_topic(&name),
            name,
            subtopics: Vec::new(),
        });
    }
    topics
}

/// Heading shape: capitalized, 10–80 chars, title-cased words, and not a
/// sentence (no terminal punctuation).
fn looks_like_heading(line: &str) -> bool {
    let len = line.chars().count();
    if !(10..=80).contains(&len) {
        return false;
    }
    if line.ends_with(['.', '!', '?', ':', ';', ',']) {
        return false;
    }
    if !line.chars().next().map(char::is_uppercase).unwrap_or(false) {
        return false;
    }
    line.split_whitespace()
        .filter(|w| w.chars().count() > 2)
        .all(|w| w.chars().next().map(char::is_uppercase).unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_scan() {
        let text = "1. Introduction to Algorithms\n\
                    - Definition of an algorithm\n\
                    - Examples include sorting\n\
                    2. Data Structures\n\
                    - Arrays and Lists\n";
        let tree = build_topic_tree(text);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Introduction To Algorithms");
        assert_eq!(
            tree[0].subtopics,
            vec!["Definition Of An Algorithm", "Examples Include Sorting"]
        );
        assert_eq!(tree[1].name, "Data Structures");
    }

    #[test]
    fn test_subtopics_deduplicated_and_capped() {
        let mut text = String::from("1. Sorting Algorithms\n");
        for _ in 0..3 {
            text.push_str("- Insertion sort basics\n");
        }
        for i in 0..12 {
            text.push_str(&format!("- Distinct subtopic number {}\n", i));
        }
        let tree = build_topic_tree(&text);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].subtopics.len(), MAX_SUBTOPICS);
        let first = &tree[0].subtopics[0];
        assert_eq!(tree[0].subtopics.iter().filter(|s| *s == first).count(), 1);
    }

    #[test]
    fn test_topic_count_capped() {
        let mut text = String::new();
        for i in 0..30 {
            text.push_str(&format!("{}. Generated Heading Number {}\n", i + 1, i + 1));
        }
        let tree = build_topic_tree(&text);
        assert_eq!(tree.len(), MAX_TOPICS);
    }

    #[test]
    fn test_duplicate_topic_names_collapse() {
        let text = "1. Graph Theory\n2. Graph Theory\n3. Network Flows\n";
        let tree = build_topic_tree(text);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Graph Theory");
        assert_eq!(tree[1].name, "Network Flows");
    }

    #[test]
    fn test_subtopic_without_open_topic_is_ignored() {
        let text = "- stray bullet before any heading\nsome prose follows here.\n";
        let tree = build_topic_tree(text);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_fallback_numbered_sections_in_flowed_text() {
        let text = "The course covers: 1. Advanced Network Architectures. \
                    2. Distributed Consensus Protocols. Assessment is by exam.";
        let tree = build_topic_tree(text);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Advanced Network Architectures");
        assert_eq!(tree[1].name, "Distributed Consensus Protocols");
        assert!(tree.iter().all(|t| t.subtopics.is_empty()));
    }

    #[test]
    fn test_fallback_heading_lines() {
        // Single-word headings slip past the per-line scan, which wants at
        // least two words; the heading fallback still recovers them.
        let text = "a short note about the course follows below.\n\
                    Thermodynamics\n\
                    the first weeks cover basic laws only.\n\
                    Electromagnetism\n";
        let tree = build_topic_tree(text);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].name, "Thermodynamics");
        assert_eq!(tree[1].name, "Electromagnetism");
    }

    #[test]
    fn test_description_keyword_table() {
        let text = "1. Introduction to Compilers\n2. Query Optimization Strategies\n";
        let tree = build_topic_tree(text);
        assert_eq!(
            tree[0].description,
            "Foundational material introducing the subject area"
        );
        assert_eq!(
            tree[1].description,
            "Key concepts and learning objectives for Query Optimization Strategies"
        );
    }

    #[test]
    fn test_empty_text_yields_empty_tree() {
        assert!(build_topic_tree("").is_empty());
    }
}
