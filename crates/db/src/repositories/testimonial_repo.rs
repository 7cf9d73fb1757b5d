//! Repository for the `testimonial` collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::collections;
use crate::models::Testimonial;

/// Provides read and seed-time insert access for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Build the listing filter: `{featured: value}` when the flag is
    /// given, otherwise an empty filter matching every document.
    pub fn filter(featured: Option<bool>) -> Document {
        match featured {
            Some(value) => doc! { "featured": value },
            None => Document::new(),
        }
    }

    /// List testimonials, optionally restricted to (non-)featured ones.
    pub async fn list(
        db: &Database,
        featured: Option<bool>,
    ) -> Result<Vec<Testimonial>, mongodb::error::Error> {
        db.collection::<Testimonial>(collections::TESTIMONIAL)
            .find(Self::filter(featured))
            .await?
            .try_collect()
            .await
    }

    /// Number of stored testimonials.
    pub async fn count(db: &Database) -> Result<u64, mongodb::error::Error> {
        db.collection::<Testimonial>(collections::TESTIMONIAL)
            .count_documents(doc! {})
            .await
    }

    /// Insert a batch of testimonials (used by the seed routine).
    pub async fn insert_many(
        db: &Database,
        testimonials: &[Testimonial],
    ) -> Result<(), mongodb::error::Error> {
        db.collection::<Testimonial>(collections::TESTIMONIAL)
            .insert_many(testimonials)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_is_empty_without_param() {
        assert_eq!(TestimonialRepo::filter(None), Document::new());
    }

    #[test]
    fn filter_matches_featured_flag() {
        assert_eq!(
            TestimonialRepo::filter(Some(true)),
            doc! { "featured": true }
        );
        assert_eq!(
            TestimonialRepo::filter(Some(false)),
            doc! { "featured": false }
        );
    }
}
