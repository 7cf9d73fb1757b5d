//! Repository for the `post` collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::collections;
use crate::models::Post;

/// Provides read and seed-time insert access for blog posts.
pub struct PostRepo;

impl PostRepo {
    /// Build the listing filter: posts whose `tags` array contains the
    /// given tag, otherwise an empty filter.
    pub fn filter(tag: Option<&str>) -> Document {
        match tag {
            Some(value) => doc! { "tags": { "$in": [value] } },
            None => Document::new(),
        }
    }

    /// List posts, optionally restricted to those carrying a tag.
    pub async fn list(
        db: &Database,
        tag: Option<&str>,
    ) -> Result<Vec<Post>, mongodb::error::Error> {
        db.collection::<Post>(collections::POST)
            .find(Self::filter(tag))
            .await?
            .try_collect()
            .await
    }

    /// Number of stored posts.
    pub async fn count(db: &Database) -> Result<u64, mongodb::error::Error> {
        db.collection::<Post>(collections::POST)
            .count_documents(doc! {})
            .await
    }

    /// Insert a single post (used by the seed routine).
    pub async fn insert_one(db: &Database, post: &Post) -> Result<(), mongodb::error::Error> {
        db.collection::<Post>(collections::POST)
            .insert_one(post)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_uses_array_membership() {
        assert_eq!(
            PostRepo::filter(Some("cosmetic dentistry")),
            doc! { "tags": { "$in": ["cosmetic dentistry"] } }
        );
        assert_eq!(PostRepo::filter(None), Document::new());
    }
}
