//! Handler for the testimonial listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use paris_db::repositories::TestimonialRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/testimonials`.
#[derive(Debug, Deserialize)]
pub struct TestimonialListParams {
    pub featured: Option<bool>,
}

/// GET /api/testimonials
///
/// List testimonials, optionally filtered by the homepage `featured` flag.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> AppResult<impl IntoResponse> {
    let db = state.db()?;
    let testimonials = TestimonialRepo::list(db, params.featured).await?;

    Ok(Json(testimonials))
}
