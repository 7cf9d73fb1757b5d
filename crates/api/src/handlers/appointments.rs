//! Handler for appointment-request intake, the only write endpoint.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use paris_db::models::AppointmentRequest;
use paris_db::repositories::AppointmentRepo;
use serde::Serialize;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// Acknowledgement for a stored appointment request.
#[derive(Debug, Serialize)]
pub struct AppointmentResponse {
    pub id: String,
    pub success: bool,
}

/// POST /api/appointment
///
/// Validates the lead against the schema constraints and stores it.
/// Validation runs before the database is touched, so a malformed payload
/// never reaches persistence.
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<AppointmentRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let db = state.db()?;
    let id = AppointmentRepo::insert(db, &payload).await?;

    tracing::info!(
        appointment_id = %id,
        service_type = ?payload.service_type,
        "Appointment request stored"
    );

    Ok(Json(AppointmentResponse { id, success: true }))
}
