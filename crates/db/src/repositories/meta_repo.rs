//! Repository for the `meta` collection.
//!
//! Holds operational marker documents keyed by a fixed string; currently
//! the only marker is the seed sentinel.

use chrono::Utc;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::Database;
use paris_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::collections;

/// Marker key recording that the seed routine has completed once.
pub const SEED_MARKER_KEY: &str = "__seed_paris_dental__";

/// A marker document in the `meta` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaMarker {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    pub key: String,
    pub created_at: Timestamp,
}

/// Provides access to operational markers.
pub struct MetaRepo;

impl MetaRepo {
    /// Whether the seed sentinel has been written.
    pub async fn seed_marker_exists(db: &Database) -> Result<bool, mongodb::error::Error> {
        let marker = db
            .collection::<MetaMarker>(collections::META)
            .find_one(doc! { "key": SEED_MARKER_KEY })
            .await?;

        Ok(marker.is_some())
    }

    /// Write the seed sentinel with the current timestamp.
    pub async fn insert_seed_marker(db: &Database) -> Result<(), mongodb::error::Error> {
        let marker = MetaMarker {
            id: None,
            key: SEED_MARKER_KEY.to_string(),
            created_at: Utc::now(),
        };

        db.collection::<MetaMarker>(collections::META)
            .insert_one(&marker)
            .await?;
        Ok(())
    }
}
