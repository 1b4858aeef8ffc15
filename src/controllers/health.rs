use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::db::DatabaseProbe;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

pub async fn health_ready(State(probe): State<Arc<dyn DatabaseProbe>>) -> impl IntoResponse {
    if probe.is_reachable().await {
        (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected"
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "database": "disconnected"
            })),
        )
    }
}
