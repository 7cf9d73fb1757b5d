use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
pub struct RootStatus {
    pub message: &'static str,
    pub status: &'static str,
}

/// Greeting payload for the frontend connectivity check.
#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET / -- liveness message.
async fn root() -> Json<RootStatus> {
    Json(RootStatus {
        message: "Paris Dental API running",
        status: "ok",
    })
}

/// GET /api/hello -- static greeting.
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello from Paris Dental backend!",
    })
}

/// Mount the liveness route (root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
