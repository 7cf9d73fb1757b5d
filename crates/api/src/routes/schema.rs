//! Schema listing for admin tooling.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /schema -- enumerate the API collections and the JSON-schema
/// documents for the validated entity shapes.
async fn get_schema() -> Json<Value> {
    Json(json!({
        "collections": paris_db::schema::API_COLLECTIONS,
        "models": paris_db::schema::models(),
    }))
}

/// Mount the schema route (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/schema", get(get_schema))
}
