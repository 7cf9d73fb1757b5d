use std::sync::Arc;

use mongodb::Database;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (`Database` is an `Arc` handle internally).
#[derive(Clone)]
pub struct AppState {
    /// Database handle; `None` when no handle could be established at
    /// process init.
    pub db: Option<Database>,
    /// Server configuration (the diagnostics endpoint reads the raw
    /// env-derived values).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The database handle, or the error every persistence-backed handler
    /// returns while the service runs without a database.
    pub fn db(&self) -> Result<&Database, AppError> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }
}
