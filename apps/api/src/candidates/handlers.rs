//! Axum route handlers for the authenticated candidate's profile.

use axum::{extract::State, Json};

use crate::auth::AuthUser;
use crate::candidates::profile::{ProfileUpdate, ProfileUpdateRequest};
use crate::candidates::queries::{fetch_candidate_row, update_profile};
use crate::errors::AppError;
use crate::models::candidate::CandidateRow;
use crate::state::AppState;

/// GET /api/v1/user/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<CandidateRow>, AppError> {
    let candidate = fetch_candidate_row(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}

/// PUT /api/v1/user/profile
///
/// Updates the fields present in the body. Blank values are ignored, so
/// submitting an empty skills field keeps the skills the recommender scores.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<CandidateRow>, AppError> {
    let update = ProfileUpdate::from_request(request);

    let candidate = if update.is_empty() {
        fetch_candidate_row(&state.db, auth.user_id).await?
    } else {
        update_profile(&state.db, auth.user_id, &update).await?
    };

    let candidate =
        candidate.ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;
    Ok(Json(candidate))
}
