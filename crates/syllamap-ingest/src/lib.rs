//! Syllabus ingestion: uploaded-file text extraction and the mind-map
//! structure-recovery pipeline.

pub mod extract;
pub mod file;
pub mod resources;

pub use extract::{extract, Concept, CourseInfo, MindMapResult, Topic};
pub use resources::{link_resources, Link, ResourceLinks};
