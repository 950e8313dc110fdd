//! Mind-map extraction pipeline — heuristic structure recovery for syllabi.
//!
//! Normalizes raw document text, classifies lines into main topics and
//! subtopics, assembles a bounded depth-2 outline, and independently mines
//! key-concept definitions. Every stage is a pure function of its input, so
//! the whole pipeline is deterministic and total: degenerate text produces an
//! empty outline rather than an error.

pub mod classify;
pub mod concepts;
pub mod course_info;
pub mod filter;
pub mod normalize;
pub mod outline;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Course title and description recovered from the document header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseInfo {
    pub title: String,
    pub description: String,
}

/// A top-level outline topic with up to eight subtopics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub subtopics: Vec<String>,
    pub description: String,
}

/// A key term paired with a mined definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub description: String,
}

/// Combined extraction result for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MindMapResult {
    pub course_info: CourseInfo,
    pub topics: Vec<Topic>,
    pub key_concepts: Vec<Concept>,
}

/// Run the full pipeline on raw document text.
pub fn extract(document_text: &str) -> MindMapResult {
    let text = normalize::normalize_text(document_text);

    let course_info = course_info::extract_course_info(&text);
    let topics = filter::filter_topics(outline::build_topic_tree(&text));
    let key_concepts = concepts::extract_key_concepts(&text);

    debug!(
        "extracted {} topics and {} concepts",
        topics.len(),
        key_concepts.len()
    );

    MindMapResult {
        course_info,
        topics,
        key_concepts,
    }
}
