use crate::api::AppState;
use crate::domain::{Match, MatchId};
use crate::engine::PortfolioSummary;
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    /// Symbol to market value, with a trailing `cash` entry.
    pub allocation: Vec<AllocationSlice>,
}

#[derive(Debug, Serialize)]
pub struct AllocationSlice {
    pub label: String,
    pub value: String,
}

fn lookup(app: &AppState, id: String) -> Result<Match, AppError> {
    let id = MatchId::new(id);
    let snapshot = app.store.snapshot();
    let record = snapshot.get_match(&id).cloned();
    record.ok_or_else(|| AppError::NotFound(format!("match {}", id)))
}

pub async fn get_match(
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> Result<Json<Match>, AppError> {
    lookup(&app, id).map(Json)
}

pub async fn get_portfolio(
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> Result<Json<PortfolioResponse>, AppError> {
    let record = lookup(&app, id)?;
    let summary = PortfolioSummary::for_match(&record);
    let allocation = summary
        .allocation()
        .into_iter()
        .map(|(label, value)| AllocationSlice {
            label,
            value: value.to_canonical_string(),
        })
        .collect();

    Ok(Json(PortfolioResponse {
        summary,
        allocation,
    }))
}
