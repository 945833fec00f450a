//! Axum route handlers for browsing and saving job postings.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::candidates::queries::{apply_to_job, fetch_candidate_row, save_job, unsave_job};
use crate::errors::AppError;
use crate::jobs::queries::{fetch_active_jobs, fetch_job};
use crate::jobs::search::{filter_jobs, JobFilter, JobSearchQuery};
use crate::models::job::JobPostingRow;
use crate::state::AppState;

/// GET /api/v1/job
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<Json<Vec<JobPostingRow>>, AppError> {
    let filter = JobFilter::from_query(&query);
    let jobs = fetch_active_jobs(&state.db).await?;
    let total = jobs.len();

    let jobs = filter_jobs(jobs, &filter);
    debug!("Job search kept {} of {total} active postings", jobs.len());

    Ok(Json(jobs))
}

/// GET /api/v1/job/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobPostingRow>, AppError> {
    let job = fetch_job(&state.db, job_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}

/// POST /api/v1/job/:id/save
pub async fn handle_save_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if fetch_job(&state.db, job_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    if !save_job(&state.db, auth.user_id, job_id).await? {
        return Err(AppError::NotFound("Candidate not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/job/:id/save
pub async fn handle_unsave_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !unsave_job(&state.db, auth.user_id, job_id).await? {
        return Err(AppError::NotFound("Candidate not found".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/job/:id/apply
///
/// Returns 201 for a new application and 204 when the candidate had already
/// applied.
pub async fn handle_apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if fetch_job(&state.db, job_id).await?.is_none() {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }
    if fetch_candidate_row(&state.db, auth.user_id).await?.is_none() {
        return Err(AppError::NotFound("Candidate not found".to_string()));
    }

    if apply_to_job(&state.db, auth.user_id, job_id).await? {
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::NO_CONTENT)
    }
}
