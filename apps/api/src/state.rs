use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The generative model behind POST /api/match. Trait object so tests
    /// can substitute a stub client.
    pub model: Arc<dyn GenerativeModel>,
    pub config: Config,
}
