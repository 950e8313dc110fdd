//! Post-hoc topic filtering: boilerplate sections and degenerate names.

use super::Topic;

/// Sections that are document plumbing rather than course content.
const NOISE_KEYWORDS: &[&str] = &[
    "page",
    "reference",
    "bibliography",
    "index",
    "appendix",
    "table of contents",
    "preface",
    "acknowledgment",
];

/// Drop noise topics. Order-preserving; survivors are never reordered.
pub fn filter_topics(topics: Vec<Topic>) -> Vec<Topic> {
    topics.into_iter().filter(is_content_topic).collect()
}

fn is_content_topic(topic: &Topic) -> bool {
    let len = topic.name.chars().count();
    if !(5..=150).contains(&len) {
        return false;
    }
    let lower = topic.name.to_lowercase();
    !NOISE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
