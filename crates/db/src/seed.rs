//! One-time seeding of default marketing content.
//!
//! The routine is guarded by a sentinel document in the `meta` collection
//! so it runs once across the service's lifetime, not once per process
//! start. Each content collection is only populated if it is empty, so a
//! concurrent or repeated run degrades to no-op existence checks.

use chrono::Utc;
use mongodb::Database;

use crate::models::{Post, Service, Testimonial};
use crate::repositories::{MetaRepo, PostRepo, ServiceRepo, TestimonialRepo};

/// Outcome of one seed invocation. The startup sequence logs this and
/// moves on; nothing else consumes it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// The sentinel already existed; nothing was touched.
    pub already_seeded: bool,
    pub testimonials_inserted: usize,
    pub services_inserted: usize,
    pub posts_inserted: usize,
}

/// Populate default content into empty collections, then write the
/// sentinel.
///
/// The sentinel is written unconditionally after all three collections
/// have been attempted, even if none of them needed seeding. Errors abort
/// the routine; the caller decides whether that matters (at startup it
/// does not).
pub async fn ensure_seed_data(db: &Database) -> Result<SeedReport, mongodb::error::Error> {
    if MetaRepo::seed_marker_exists(db).await? {
        return Ok(SeedReport {
            already_seeded: true,
            ..SeedReport::default()
        });
    }

    tracing::info!("No seed sentinel found, seeding default content");
    let mut report = SeedReport::default();

    if TestimonialRepo::count(db).await? == 0 {
        let samples = sample_testimonials();
        TestimonialRepo::insert_many(db, &samples).await?;
        report.testimonials_inserted = samples.len();
    } else {
        tracing::debug!("Testimonial collection not empty, skipping");
    }

    if ServiceRepo::count(db).await? == 0 {
        let samples = sample_services();
        ServiceRepo::insert_many(db, &samples).await?;
        report.services_inserted = samples.len();
    } else {
        tracing::debug!("Service collection not empty, skipping");
    }

    if PostRepo::count(db).await? == 0 {
        PostRepo::insert_one(db, &welcome_post()).await?;
        report.posts_inserted = 1;
    } else {
        tracing::debug!("Post collection not empty, skipping");
    }

    MetaRepo::insert_seed_marker(db).await?;

    Ok(report)
}

fn sample_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: None,
            name: "A.M.".to_string(),
            quote: "Best Temecula dentist experience I've ever had.".to_string(),
            rating: 5,
            photo_url: None,
            featured: true,
        },
        Testimonial {
            id: None,
            name: "J.S.".to_string(),
            quote: "Beautiful office, gentle care, and amazing results!".to_string(),
            rating: 5,
            photo_url: None,
            featured: true,
        },
        Testimonial {
            id: None,
            name: "K.R.".to_string(),
            quote: "They made me feel at ease from the moment I walked in.".to_string(),
            rating: 5,
            photo_url: None,
            featured: false,
        },
    ]
}

fn sample_services() -> Vec<Service> {
    vec![
        Service {
            id: None,
            name: "General Dentistry".to_string(),
            category: "General".to_string(),
            description: "Cleanings, exams, and preventive care for the whole family."
                .to_string(),
            highlights: vec![
                "Gentle cleanings".to_string(),
                "Digital X-rays".to_string(),
                "Comprehensive exams".to_string(),
            ],
            icon: Some("Tooth".to_string()),
            slug: Some("general-dentistry".to_string()),
        },
        Service {
            id: None,
            name: "Cosmetic Dentistry".to_string(),
            category: "Cosmetic".to_string(),
            description: "Veneers, whitening, and smile design for confident smiles."
                .to_string(),
            highlights: vec![
                "Porcelain veneers".to_string(),
                "Professional whitening".to_string(),
                "Bonding".to_string(),
            ],
            icon: Some("Sparkles".to_string()),
            slug: Some("cosmetic-dentistry".to_string()),
        },
        Service {
            id: None,
            name: "Dental Implants".to_string(),
            category: "Restorative".to_string(),
            description: "Modern implant solutions to replace missing teeth.".to_string(),
            highlights: vec![
                "Single and full-arch".to_string(),
                "3D guided planning".to_string(),
                "Natural aesthetics".to_string(),
            ],
            icon: Some("Pillar".to_string()),
            slug: Some("dental-implants".to_string()),
        },
        Service {
            id: None,
            name: "Periodontal Care".to_string(),
            category: "Periodontal".to_string(),
            description: "Laser-assisted therapy and maintenance for healthy gums.".to_string(),
            highlights: vec![
                "Laser therapy".to_string(),
                "Deep cleaning".to_string(),
                "Periodontal maintenance".to_string(),
            ],
            icon: Some("HeartPulse".to_string()),
            slug: Some("periodontal-care".to_string()),
        },
        Service {
            id: None,
            name: "Dental Technology".to_string(),
            category: "Technology".to_string(),
            description: "State-of-the-art tech for precision and comfort.".to_string(),
            highlights: vec![
                "CAD/CAM same-day".to_string(),
                "3D CBCT imaging".to_string(),
                "Intraoral scanning".to_string(),
            ],
            icon: Some("Cpu".to_string()),
            slug: Some("dental-technology".to_string()),
        },
    ]
}

fn welcome_post() -> Post {
    Post {
        id: None,
        title: "Welcome to Paris Dental – Modern Dental Care in Temecula".to_string(),
        slug: "welcome-paris-dental".to_string(),
        excerpt: Some(
            "Discover patient-first care powered by advanced technology in Temecula.".to_string(),
        ),
        content: "We are thrilled to welcome you to our modern practice led by Dr. Noorullah \
                  Azim. Our team focuses on comfort, precision, and beautiful results."
            .to_string(),
        author: Some("Paris Dental".to_string()),
        tags: vec![
            "Temecula dentist".to_string(),
            "cosmetic dentistry".to_string(),
        ],
        published_at: Some(Utc::now()),
        status: "published".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use validator::Validate;

    #[test]
    fn sample_testimonials_match_expected_content() {
        let testimonials = sample_testimonials();

        assert_eq!(testimonials.len(), 3);
        assert_eq!(
            testimonials.iter().filter(|t| !t.featured).count(),
            1,
            "exactly one sample testimonial stays off the homepage"
        );
        for testimonial in &testimonials {
            testimonial.validate().unwrap();
        }
    }

    #[test]
    fn sample_services_cover_distinct_categories() {
        let services = sample_services();

        assert_eq!(services.len(), 5);

        let categories: HashSet<_> = services.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories.len(), 5);
        assert!(categories.contains("Cosmetic"));

        let slugs: HashSet<_> = services.iter().filter_map(|s| s.slug.as_deref()).collect();
        assert_eq!(slugs.len(), 5);
    }

    #[test]
    fn welcome_post_is_published_with_tags() {
        let post = welcome_post();

        assert_eq!(post.slug, "welcome-paris-dental");
        assert_eq!(post.status, "published");
        assert!(post.published_at.is_some());
        assert!(post.tags.contains(&"cosmetic dentistry".to_string()));
    }
}
