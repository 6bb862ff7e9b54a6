pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers::handle_match;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/match", post(handle_match))
        .with_state(state)
}
