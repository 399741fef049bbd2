//! Health check endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    pub store: String,
}

/// GET /api/health
///
/// Does NOT require authentication. Reports which store mode the process is
/// running in so a degraded deployment is visible from outside.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "enquiry-sv".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.service.store_mode().to_string(),
    })
}
