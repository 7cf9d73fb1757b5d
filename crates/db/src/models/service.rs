//! Dental service model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A service offered by the practice. Created only by the seed routine;
/// read via `GET /api/services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    pub name: String,
    /// One of General, Cosmetic, Restorative, Periodontal, Technology.
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    /// UI icon identifier.
    pub icon: Option<String>,
    pub slug: Option<String>,
}
