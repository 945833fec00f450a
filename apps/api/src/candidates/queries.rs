use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::candidates::profile::ProfileUpdate;
use crate::models::candidate::{ApplicationRef, Candidate, CandidateRow};

pub async fn fetch_candidate_row(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Option<CandidateRow>, sqlx::Error> {
    sqlx::query_as::<_, CandidateRow>("SELECT * FROM candidates WHERE id = $1")
        .bind(candidate_id)
        .fetch_optional(pool)
        .await
}

/// Returns the job reference of every application the candidate submitted.
pub async fn fetch_applications(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Vec<ApplicationRef>, sqlx::Error> {
    sqlx::query_as::<_, ApplicationRef>(
        "SELECT job_id FROM applications WHERE applicant_id = $1 ORDER BY created_at",
    )
    .bind(candidate_id)
    .fetch_all(pool)
    .await
}

/// Loads a candidate together with their applications.
pub async fn fetch_candidate(
    pool: &PgPool,
    candidate_id: Uuid,
) -> Result<Option<Candidate>, sqlx::Error> {
    let Some(row) = fetch_candidate_row(pool, candidate_id).await? else {
        return Ok(None);
    };
    let applications = fetch_applications(pool, candidate_id).await?;
    Ok(Some(Candidate::from_row(row, applications)))
}

/// Applies the fields present in `update`; absent fields keep their value.
/// Returns `None` if the candidate does not exist.
pub async fn update_profile(
    pool: &PgPool,
    candidate_id: Uuid,
    update: &ProfileUpdate,
) -> Result<Option<CandidateRow>, sqlx::Error> {
    let row = sqlx::query_as::<_, CandidateRow>(
        r#"
        UPDATE candidates
        SET fullname     = COALESCE($2, fullname),
            email        = COALESCE($3, email),
            phone_number = COALESCE($4, phone_number),
            bio          = COALESCE($5, bio),
            skills       = COALESCE($6, skills)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(candidate_id)
    .bind(update.fullname.as_deref())
    .bind(update.email.as_deref())
    .bind(update.phone_number.as_deref())
    .bind(update.bio.as_deref())
    .bind(update.skills.as_deref())
    .fetch_optional(pool)
    .await?;

    if row.is_some() {
        info!("Updated profile for candidate {candidate_id}");
    }
    Ok(row)
}

/// Records an application of the candidate to `job_id`. Applying twice is a
/// no-op. Returns `true` when a new application was created.
pub async fn apply_to_job(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO applications (job_id, applicant_id)
        VALUES ($1, $2)
        ON CONFLICT (job_id, applicant_id) DO NOTHING
        "#,
    )
    .bind(job_id)
    .bind(candidate_id)
    .execute(pool)
    .await?;

    let created = result.rows_affected() > 0;
    if created {
        info!("Candidate {candidate_id} applied to job {job_id}");
    }
    Ok(created)
}

/// Adds `job_id` to the candidate's saved jobs. Saving twice is a no-op.
/// Returns `false` if the candidate does not exist.
pub async fn save_job(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE candidates
        SET saved_jobs = CASE
            WHEN $2 = ANY(COALESCE(saved_jobs, '{}'::uuid[])) THEN saved_jobs
            ELSE array_append(COALESCE(saved_jobs, '{}'::uuid[]), $2)
        END
        WHERE id = $1
        "#,
    )
    .bind(candidate_id)
    .bind(job_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Removes `job_id` from the candidate's saved jobs.
/// Returns `false` if the candidate does not exist.
pub async fn unsave_job(
    pool: &PgPool,
    candidate_id: Uuid,
    job_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE candidates
        SET saved_jobs = array_remove(COALESCE(saved_jobs, '{}'::uuid[]), $2)
        WHERE id = $1
        "#,
    )
    .bind(candidate_id)
    .bind(job_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
