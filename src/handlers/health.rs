use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Handle /health endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handle /ready endpoint
pub async fn readiness_check() -> impl IntoResponse {
    Json(json!({ "status": "ready" }))
}
