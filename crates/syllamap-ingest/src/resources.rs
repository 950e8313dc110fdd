//! Study-resource link synthesis — pure string templating over topic names.

use serde::{Deserialize, Serialize};

use crate::extract::Topic;

/// How many topics receive resource links.
const MAX_LINKED_TOPICS: usize = 10;

/// One external study link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub url: String,
}

/// The fixed link triple for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLinks {
    pub topic: String,
    pub links: Vec<Link>,
}

/// Synthesize a video/article/tutorial link triple for each of the first
/// ten topics.
pub fn link_resources(topics: &[Topic]) -> Vec<ResourceLinks> {
    topics
        .iter()
        .take(MAX_LINKED_TOPICS)
        .filter(|t| !t.name.is_empty())
        .map(|t| ResourceLinks {
            topic: t.name.clone(),
            links: links_for(&t.name),
        })
        .collect()
}

fn links_for(name: &str) -> Vec<Link> {
    let query = urlencoding::encode(name).replace("%20", "+");
    let article = urlencoding::encode(&name.replace(' ', "_")).into_owned();
    let slug = urlencoding::encode(&name.to_lowercase().replace(' ', "-")).into_owned();

    vec![
        Link {
            kind: "video".to_string(),
            title: format!("Video Tutorial: {}", name),
            url: format!("https://www.youtube.com/results?search_query={}", query),
        },
        Link {
            kind: "article".to_string(),
            title: format!("{} - Wikipedia", name),
            url: format!("https://en.wikipedia.org/wiki/{}", article),
        },
        Link {
            kind: "tutorial".to_string(),
            title: format!("Learn {} - GeeksforGeeks", name),
            url: format!("https://www.geeksforgeeks.org/{}/", slug),
        },
    ]
}
