use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Message returned by every successful liveness call.
pub const LIVENESS_MESSAGE: &str = "Backend is live and operational!";

pub async fn check() -> impl IntoResponse {
    Json(json!({ "message": LIVENESS_MESSAGE }))
}
