//! Repository for the `service` collection.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Database;

use crate::collections;
use crate::models::Service;

/// Provides read and seed-time insert access for services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Build the listing filter: exact `category` match when given,
    /// otherwise an empty filter.
    pub fn filter(category: Option<&str>) -> Document {
        match category {
            Some(value) => doc! { "category": value },
            None => Document::new(),
        }
    }

    /// List services, optionally restricted to one category. An unknown
    /// category yields an empty list, not an error.
    pub async fn list(
        db: &Database,
        category: Option<&str>,
    ) -> Result<Vec<Service>, mongodb::error::Error> {
        db.collection::<Service>(collections::SERVICE)
            .find(Self::filter(category))
            .await?
            .try_collect()
            .await
    }

    /// Number of stored services.
    pub async fn count(db: &Database) -> Result<u64, mongodb::error::Error> {
        db.collection::<Service>(collections::SERVICE)
            .count_documents(doc! {})
            .await
    }

    /// Insert a batch of services (used by the seed routine).
    pub async fn insert_many(
        db: &Database,
        services: &[Service],
    ) -> Result<(), mongodb::error::Error> {
        db.collection::<Service>(collections::SERVICE)
            .insert_many(services)
            .await?;
        Ok(())
    }
}
