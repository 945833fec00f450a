pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::jobs::handlers as jobs;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs
        .route("/api/v1/job", get(jobs::handle_list_jobs))
        .route(
            "/api/v1/job/recommendations",
            get(matching::handle_recommendations),
        )
        .route("/api/v1/job/:id", get(jobs::handle_get_job))
        .route(
            "/api/v1/job/:id/save",
            post(jobs::handle_save_job).delete(jobs::handle_unsave_job),
        )
        .route("/api/v1/job/:id/apply", post(jobs::handle_apply))
        // Candidate profile
        .route(
            "/api/v1/user/profile",
            get(candidates::handle_get_profile).put(candidates::handle_update_profile),
        )
        .with_state(state)
}
