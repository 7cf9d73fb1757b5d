//! Team member model.
//!
//! No endpoint or seeding uses this shape yet; it is kept representable so
//! the team page can be wired up without a schema change.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A member of the practice staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub role: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub credentials: Option<String>,
}
