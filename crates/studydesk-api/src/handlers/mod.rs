//! HTTP handlers for studydesk-api.

pub mod folders;
pub mod notes;
pub mod study_materials;

use axum::{response::IntoResponse, Json};

/// Liveness probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
