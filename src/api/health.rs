use crate::api::AppState;
use axum::extract::State;
use axum::Json;

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Readiness plus the number of matches the store currently holds.
pub async fn ready(State(app): State<AppState>) -> Json<serde_json::Value> {
    let matches = app.store.snapshot().matches.len();
    Json(serde_json::json!({"status": "ready", "matches": matches}))
}
