use sqlx::PgPool;
use uuid::Uuid;

use crate::models::job::{JobPostingRow, ACTIVE_STATUS};

/// Returns every active posting, newest first. Ties on `created_at` are broken
/// by id so the order is deterministic.
pub async fn fetch_active_jobs(pool: &PgPool) -> Result<Vec<JobPostingRow>, sqlx::Error> {
    sqlx::query_as::<_, JobPostingRow>(
        r#"
        SELECT j.id, j.title, j.description, j.location, j.job_type, j.salary,
               j.company_id, c.name AS company_name, j.required_skills, j.skills,
               j.status, j.created_at
        FROM jobs j
        LEFT JOIN companies c ON c.id = j.company_id
        WHERE j.status = $1
        ORDER BY j.created_at DESC, j.id
        "#,
    )
    .bind(ACTIVE_STATUS)
    .fetch_all(pool)
    .await
}

/// Returns a single posting regardless of status.
pub async fn fetch_job(pool: &PgPool, job_id: Uuid) -> Result<Option<JobPostingRow>, sqlx::Error> {
    sqlx::query_as::<_, JobPostingRow>(
        r#"
        SELECT j.id, j.title, j.description, j.location, j.job_type, j.salary,
               j.company_id, c.name AS company_name, j.required_skills, j.skills,
               j.status, j.created_at
        FROM jobs j
        LEFT JOIN companies c ON c.id = j.company_id
        WHERE j.id = $1
        "#,
    )
    .bind(job_id)
    .fetch_optional(pool)
    .await
}
