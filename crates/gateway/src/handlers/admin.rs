//! Maintenance handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use community_hub_common::errors::{AppError, Result};

#[derive(Serialize)]
pub struct SetupResponse {
    pub status: String,
    pub tables: Vec<String>,
}

/// `POST /api/admin/setup-database`
///
/// Creates missing content tables. Answers 404 unless
/// `server.maintenance_enabled` is set.
pub async fn setup_database(State(state): State<AppState>) -> Result<Json<SetupResponse>> {
    if !state.config.server.maintenance_enabled {
        return Err(AppError::NotFound {
            resource: "/api/admin/setup-database".to_string(),
        });
    }

    let tables = state.store.provision().await?;

    tracing::info!(tables = ?tables, "Database setup completed");

    Ok(Json(SetupResponse {
        status: "ok".to_string(),
        tables,
    }))
}
