use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub const API_VERSION: &str = "1.0.0";

/// GET /
/// Static service-identity banner.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Opportune AI Scholarships API is running!",
        "status": "healthy"
    }))
}

/// GET /health
/// Reports configuration presence alongside the static status. No side effects.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "gemini_configured": !state.config.gemini_api_key.is_empty(),
        "api_version": API_VERSION
    }))
}
