//! Appointment-request lead model.
//!
//! This is the only entity written through the public API. The struct
//! doubles as the request payload for `POST /api/appointment` and the
//! stored document shape; validation runs before any insert.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An appointment request submitted by a site visitor.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AppointmentRequest {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    /// Patient full name.
    pub full_name: String,
    /// Email address, validated when present.
    #[validate(email)]
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: String,
    /// Preferred date, free text as typed by the visitor.
    pub preferred_date: Option<String>,
    /// Preferred time, free text.
    pub preferred_time: Option<String>,
    /// Requested service type.
    pub service_type: Option<String>,
    /// Additional notes.
    pub message: Option<String>,
    /// Lead source identifier.
    #[serde(default = "default_source")]
    pub source: Option<String>,
}

fn default_source() -> Option<String> {
    Some("website".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_phone_is_rejected_at_deserialization() {
        let result: Result<AppointmentRequest, _> = serde_json::from_value(json!({
            "full_name": "Jane Doe",
            "email": "jane@example.com",
        }));

        assert!(result.is_err());
    }

    #[test]
    fn source_defaults_to_website() {
        let request: AppointmentRequest = serde_json::from_value(json!({
            "full_name": "Jane Doe",
            "phone": "555-0100",
        }))
        .unwrap();

        assert_eq!(request.source.as_deref(), Some("website"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn malformed_email_fails_validation() {
        let request: AppointmentRequest = serde_json::from_value(json!({
            "full_name": "Jane Doe",
            "phone": "555-0100",
            "email": "not-an-email",
        }))
        .unwrap();

        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn internal_id_is_never_serialized() {
        let request: AppointmentRequest = serde_json::from_value(json!({
            "full_name": "Jane Doe",
            "phone": "555-0100",
        }))
        .unwrap();

        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("_id").is_none());
        assert!(value.get("id").is_none());
    }
}
