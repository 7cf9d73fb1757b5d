//! Handler for the service listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use paris_db::repositories::ServiceRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/services`.
#[derive(Debug, Deserialize)]
pub struct ServiceListParams {
    pub category: Option<String>,
}

/// GET /api/services
///
/// List services, optionally filtered by exact category. An unknown
/// category yields an empty array, not an error.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<ServiceListParams>,
) -> AppResult<impl IntoResponse> {
    let db = state.db()?;
    let services = ServiceRepo::list(db, params.category.as_deref()).await?;

    Ok(Json(services))
}
