use crate::api::AppState;
use crate::domain::User;
use crate::error::AppError;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

pub async fn get_user(
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> Result<Json<DataResponse<User>>, AppError> {
    // Anything that is not a numeric id cannot name a user.
    let not_found = || AppError::NotFound(format!("user {}", id));
    let numeric_id = id.parse::<i64>().map_err(|_| not_found())?;

    let user = app.repo.get_user(numeric_id).await?.ok_or_else(not_found)?;
    Ok(Json(DataResponse { data: user }))
}

pub async fn search_users(
    Query(params): Query<UserSearchQuery>,
    State(app): State<AppState>,
) -> Result<Json<DataResponse<Vec<User>>>, AppError> {
    let limit = app.config.user_search_limit;
    let users = match params.search.as_deref().map(str::trim) {
        Some(needle) if !needle.is_empty() => app.repo.search_users(needle, limit).await?,
        _ => app.repo.list_users(limit).await?,
    };

    Ok(Json(DataResponse { data: users }))
}
