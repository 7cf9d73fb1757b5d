//! Repository for the `appointmentrequest` collection.

use mongodb::Database;

use crate::collections;
use crate::models::AppointmentRequest;

/// Provides insert access for appointment-request leads.
///
/// Leads are write-only through the API: nothing in this system reads,
/// updates, or deletes them.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a lead and return the generated identifier as a string.
    pub async fn insert(
        db: &Database,
        request: &AppointmentRequest,
    ) -> Result<String, mongodb::error::Error> {
        let result = db
            .collection::<AppointmentRequest>(collections::APPOINTMENT_REQUEST)
            .insert_one(request)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        Ok(id)
    }
}
