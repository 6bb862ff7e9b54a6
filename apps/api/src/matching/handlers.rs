//! Axum route handler for the matching API.

use axum::{extract::State, Json};
use tracing::{debug, error, info};

use crate::errors::AppError;
use crate::matching::models::{ScholarshipMatch, ScholarshipResponse, StudentProfile};
use crate::matching::parser::parse_scholarships;
use crate::matching::prompts::build_match_prompt;
use crate::state::AppState;

/// POST /api/match
///
/// Single linear attempt: validate → prompt → one model call → decode.
/// No retry, no caching, no rate limiting; every request is fully isolated.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(profile): Json<StudentProfile>,
) -> Result<Json<ScholarshipResponse>, AppError> {
    if profile.name.trim().is_empty() || profile.major.trim().is_empty() {
        return Err(AppError::Validation("Name and major are required.".to_string()));
    }

    let scholarships = query_model_for_scholarships(&state, &profile).await?;

    if scholarships.is_empty() {
        // Zero parsed entries is a valid-but-empty upstream result, surfaced
        // as 404 to match the original service's contract.
        return Err(AppError::NotFound(
            "No scholarships found matching this profile.".to_string(),
        ));
    }

    info!(
        "Matched {} scholarships for major '{}'",
        scholarships.len(),
        profile.major
    );

    Ok(Json(ScholarshipResponse {
        total_found: scholarships.len(),
        scholarships,
        search_criteria: profile,
    }))
}

/// Queries the model once and reshapes its answer into scholarship records.
async fn query_model_for_scholarships(
    state: &AppState,
    profile: &StudentProfile,
) -> Result<Vec<ScholarshipMatch>, AppError> {
    let prompt = build_match_prompt(profile);
    debug!("Sending matching prompt ({} chars)", prompt.len());

    let raw_text = state
        .model
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    parse_scholarships(&raw_text).map_err(|e| {
        // Raw model text is diagnostic detail only; it never reaches the caller.
        error!("Unparseable model output: {raw_text}");
        AppError::UpstreamParse(format!("JSON parsing error: {e}"))
    })
}
