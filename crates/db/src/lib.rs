//! MongoDB access layer for the Paris Dental backend.
//!
//! Provides the connection helper, collection name constants, entity models,
//! repositories, the one-time content seeding routine, and the JSON-schema
//! documents served by the `/schema` endpoint.

pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;

use mongodb::{Client, Database};

/// Collection names. Each entity type lives in its own collection named
/// after the lowercase entity name; `meta` holds operational marker
/// documents (e.g. the seed sentinel).
pub mod collections {
    pub const APPOINTMENT_REQUEST: &str = "appointmentrequest";
    pub const TESTIMONIAL: &str = "testimonial";
    pub const POST: &str = "post";
    pub const SERVICE: &str = "service";
    pub const META: &str = "meta";
}

/// Open a handle to the named database.
///
/// The MongoDB driver connects lazily, so this only fails on a malformed
/// connection string; an unreachable server surfaces later, on the first
/// actual operation.
pub async fn connect(url: &str, name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(url).await?;
    Ok(client.database(name))
}
