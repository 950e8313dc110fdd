//! Response-shape tests — the JSON the routes return must keep the field
//! names the frontend consumes. These run against the extraction types
//! directly; no HTTP server is needed.

use syllamap_ingest::{extract, link_resources, Topic};

#[test]
fn test_mindmap_response_shape() {
    let result = extract(
        "1. Introduction to Databases\n\
         - Types of database systems\n\
         A transaction is a unit of work executed against a database.\n",
    );
    let value = serde_json::to_value(&result).unwrap();

    assert!(value["course_info"]["title"].is_string());
    assert!(value["course_info"]["description"].is_string());
    assert!(value["topics"].is_array());
    assert!(value["key_concepts"].is_array());

    let topic = &value["topics"][0];
    assert!(topic["name"].is_string());
    assert!(topic["subtopics"].is_array());
    assert!(topic["description"].is_string());

    let concept = &value["key_concepts"][0];
    assert!(concept["name"].is_string());
    assert!(concept["description"].is_string());
}

#[test]
fn test_resource_links_shape() {
    let topics = vec![Topic {
        name: "Binary Trees".to_string(),
        subtopics: Vec::new(),
        description: String::new(),
    }];
    let resources = link_resources(&topics);
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].links.len(), 3);

    let value = serde_json::to_value(&resources).unwrap();
    for link in value[0]["links"].as_array().unwrap() {
        assert!(link["type"].is_string());
        assert!(link["title"].is_string());
        assert!(link["url"].is_string());
    }

    let kinds: Vec<&str> = value[0]["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["video", "article", "tutorial"]);
}

#[test]
fn test_config_creates_upload_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = syllamap_core::SyllamapConfig::from_env(dir.path()).unwrap();
    assert!(config.data_paths.uploads.is_dir());
}
