//! Axum route handler for job recommendations.

use async_trait::async_trait;
use axum::{extract::State, Json};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::candidates::queries::fetch_candidate;
use crate::errors::AppError;
use crate::jobs::queries::fetch_active_jobs;
use crate::matching::ranking::{annotate_and_rank, ScoredJob};
use crate::matching::scorer::MatchScorer;
use crate::models::candidate::Candidate;
use crate::models::job::JobPostingRow;
use crate::state::AppState;

/// Where recommendations read their inputs from. Backed by Postgres in
/// production.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn candidate(&self, candidate_id: Uuid) -> Result<Option<Candidate>, sqlx::Error>;

    /// Active postings only, in a stable order.
    async fn active_jobs(&self) -> Result<Vec<JobPostingRow>, sqlx::Error>;
}

#[async_trait]
impl RecommendationSource for PgPool {
    async fn candidate(&self, candidate_id: Uuid) -> Result<Option<Candidate>, sqlx::Error> {
        fetch_candidate(self, candidate_id).await
    }

    async fn active_jobs(&self) -> Result<Vec<JobPostingRow>, sqlx::Error> {
        fetch_active_jobs(self).await
    }
}

/// GET /api/v1/job/recommendations
///
/// Ranks active postings against the authenticated candidate's skills and
/// returns the best matches, highest score first.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<ScoredJob>>, AppError> {
    let recommendations = recommend(&state.db, state.scorer.as_ref(), auth.user_id).await?;
    Ok(Json(recommendations))
}

/// Loads the candidate (404 when absent) and the active postings, then ranks.
pub async fn recommend(
    source: &dyn RecommendationSource,
    scorer: &dyn MatchScorer,
    candidate_id: Uuid,
) -> Result<Vec<ScoredJob>, AppError> {
    let candidate = source
        .candidate(candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Candidate not found".to_string()))?;

    let jobs = source.active_jobs().await?;

    let recommendations = annotate_and_rank(&jobs, &candidate, scorer);

    info!(
        candidate_id = %candidate.id,
        active_jobs = jobs.len(),
        returned = recommendations.len(),
        scorer = scorer.backend(),
        "Computed job recommendations"
    );

    Ok(recommendations)
}
