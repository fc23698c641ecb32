use crate::api::AppState;
use crate::engine::State;
use crate::error::AppError;
use axum::extract::State as AxumState;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub state: State,
    pub changed: bool,
}

/// Apply a raw action object to the live store.
pub async fn dispatch_action(
    AxumState(app): AxumState<AppState>,
    Json(raw): Json<Value>,
) -> Result<Json<DispatchResponse>, AppError> {
    let dispatched = app.store.dispatch_json(raw)?;

    Ok(Json(DispatchResponse {
        state: dispatched.state.as_ref().clone(),
        changed: dispatched.changed,
    }))
}

pub async fn get_state(AxumState(app): AxumState<AppState>) -> Json<State> {
    Json(app.store.snapshot().as_ref().clone())
}
