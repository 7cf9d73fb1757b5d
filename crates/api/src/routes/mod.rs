//! Route definitions.
//!
//! Liveness, diagnostics, and schema routes mount at root level;
//! [`api_routes`] builds the `/api` tree.

pub mod diagnostics;
pub mod health;
pub mod schema;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{appointments, posts, services, testimonials};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /hello           static greeting
/// POST /appointment     store an appointment-request lead
/// GET  /testimonials    list testimonials (?featured=)
/// GET  /services        list services (?category=)
/// GET  /posts           list posts (?tag=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(health::hello))
        .route("/appointment", post(appointments::create_appointment))
        .route("/testimonials", get(testimonials::list_testimonials))
        .route("/services", get(services::list_services))
        .route("/posts", get(posts::list_posts))
}
