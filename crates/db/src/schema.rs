//! JSON-schema documents for the validated entity shapes.
//!
//! Served by `GET /schema` for admin tooling. The documents are maintained
//! by hand next to the model structs; a field added to a model must be
//! added here as well.

use serde_json::{json, Value};

use crate::collections;

/// The collections exposed through the API, in the order `/schema`
/// reports them.
pub const API_COLLECTIONS: [&str; 4] = [
    collections::APPOINTMENT_REQUEST,
    collections::TESTIMONIAL,
    collections::POST,
    collections::SERVICE,
];

/// Schema documents for all four API entity shapes, keyed by model name.
pub fn models() -> Value {
    json!({
        "AppointmentRequest": appointment_request_schema(),
        "Testimonial": testimonial_schema(),
        "Post": post_schema(),
        "Service": service_schema(),
    })
}

fn appointment_request_schema() -> Value {
    json!({
        "title": "AppointmentRequest",
        "type": "object",
        "properties": {
            "full_name": { "type": "string", "description": "Patient full name" },
            "email": { "type": "string", "format": "email" },
            "phone": { "type": "string", "description": "Contact phone number" },
            "preferred_date": { "type": "string" },
            "preferred_time": { "type": "string" },
            "service_type": { "type": "string" },
            "message": { "type": "string" },
            "source": { "type": "string", "default": "website" },
        },
        "required": ["full_name", "phone"],
    })
}

fn testimonial_schema() -> Value {
    json!({
        "title": "Testimonial",
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Patient name or initials" },
            "quote": { "type": "string" },
            "rating": { "type": "integer", "minimum": 1, "maximum": 5, "default": 5 },
            "photo_url": { "type": "string" },
            "featured": { "type": "boolean", "default": true },
        },
        "required": ["name", "quote"],
    })
}

fn post_schema() -> Value {
    json!({
        "title": "Post",
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "slug": { "type": "string" },
            "excerpt": { "type": "string" },
            "content": { "type": "string" },
            "author": { "type": "string", "default": "Paris Dental" },
            "tags": { "type": "array", "items": { "type": "string" }, "default": [] },
            "published_at": { "type": "string", "format": "date-time" },
            "status": { "type": "string", "default": "published", "description": "draft|published" },
        },
        "required": ["title", "slug", "content"],
    })
}

fn service_schema() -> Value {
    json!({
        "title": "Service",
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "category": {
                "type": "string",
                "description": "General, Cosmetic, Restorative, Periodontal, Technology",
            },
            "description": { "type": "string" },
            "highlights": { "type": "array", "items": { "type": "string" }, "default": [] },
            "icon": { "type": "string" },
            "slug": { "type": "string" },
        },
        "required": ["name", "category", "description"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_models_are_documented() {
        let models = models();
        let map = models.as_object().unwrap();

        assert_eq!(map.len(), 4);
        for name in ["AppointmentRequest", "Testimonial", "Post", "Service"] {
            let schema = &map[name];
            assert_eq!(schema["type"], "object");
            assert!(schema["required"].as_array().is_some_and(|r| !r.is_empty()));
        }
    }

    #[test]
    fn collection_list_matches_collection_constants() {
        assert_eq!(
            API_COLLECTIONS,
            ["appointmentrequest", "testimonial", "post", "service"]
        );
    }
}
