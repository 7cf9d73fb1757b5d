//! Handler for the blog post listing.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use paris_db::repositories::PostRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/posts`.
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    pub tag: Option<String>,
}

/// GET /api/posts
///
/// List posts, optionally restricted to those whose `tags` array contains
/// the given tag.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> AppResult<impl IntoResponse> {
    let db = state.db()?;
    let posts = PostRepo::list(db, params.tag.as_deref()).await?;

    Ok(Json(posts))
}
