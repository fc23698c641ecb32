pub mod actions;
pub mod health;
pub mod matches;
pub mod users;

use crate::config::Config;
use crate::db::Repository;
use crate::store::Store;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub store: Arc<Store>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, store: Arc<Store>, config: Config) -> Self {
        Self {
            repo,
            store,
            config,
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/actions", post(actions::dispatch_action))
        .route("/v1/state", get(actions::get_state))
        .route("/v1/matches/:id", get(matches::get_match))
        .route("/v1/matches/:id/portfolio", get(matches::get_portfolio))
        .route("/users", get(users::search_users))
        .route("/users/", get(users::search_users))
        .route("/users/:id", get(users::get_user))
        .layer(cors)
        .with_state(state)
}
