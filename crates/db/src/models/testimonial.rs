//! Patient testimonial model.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A patient testimonial shown on the marketing site.
///
/// Created only by the seed routine; read via `GET /api/testimonials`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Testimonial {
    #[serde(rename = "_id", skip_serializing, default)]
    pub id: Option<ObjectId>,
    /// Patient name or initials.
    pub name: String,
    pub quote: String,
    /// Star rating, 1-5 inclusive.
    #[validate(range(min = 1, max = 5))]
    #[serde(default = "default_rating")]
    pub rating: i32,
    /// Photo URL if the patient permitted one.
    pub photo_url: Option<String>,
    /// Whether to feature this testimonial on the homepage.
    #[serde(default = "default_featured")]
    pub featured: bool,
}

fn default_rating() -> i32 {
    5
}

fn default_featured() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_and_featured_take_defaults() {
        let testimonial: Testimonial = serde_json::from_value(json!({
            "name": "A.M.",
            "quote": "Wonderful care.",
        }))
        .unwrap();

        assert_eq!(testimonial.rating, 5);
        assert!(testimonial.featured);
    }

    #[test]
    fn rating_outside_range_fails_validation() {
        for rating in [0, 6] {
            let testimonial: Testimonial = serde_json::from_value(json!({
                "name": "A.M.",
                "quote": "Wonderful care.",
                "rating": rating,
            }))
            .unwrap();

            assert!(testimonial.validate().is_err());
        }
    }
}
