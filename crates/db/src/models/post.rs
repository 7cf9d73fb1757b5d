//! Blog post model.

use mongodb::bson::oid::ObjectId;
use paris_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A blog post. Created only by the seed routine; read via `GET /api/posts`.
///
/// `slug` is intended to be unique but uniqueness is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default = "default_author")]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: Option<Timestamp>,
    /// Expected values are `draft` or `published`, not enforced.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_author() -> Option<String> {
    Some("Paris Dental".to_string())
}

fn default_status() -> String {
    "published".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn author_status_and_tags_take_defaults() {
        let post: Post = serde_json::from_value(json!({
            "title": "Hello",
            "slug": "hello",
            "content": "Body text.",
        }))
        .unwrap();

        assert_eq!(post.author.as_deref(), Some("Paris Dental"));
        assert_eq!(post.status, "published");
        assert!(post.tags.is_empty());
    }
}
