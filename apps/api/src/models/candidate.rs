use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub fullname: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub saved_jobs: Option<Vec<Uuid>>,
    pub created_at: DateTime<Utc>,
}

/// The job reference of one application. Withdrawn or orphaned applications
/// may have lost their job.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ApplicationRef {
    pub job_id: Option<Uuid>,
}

/// Everything the recommender needs to know about a job seeker.
#[derive(Debug, Clone, Default)]
pub struct Candidate {
    pub id: Uuid,
    pub skills: Vec<String>,
    pub saved_jobs: Vec<Uuid>,
    pub applications: Vec<ApplicationRef>,
}

impl Candidate {
    pub fn from_row(row: CandidateRow, applications: Vec<ApplicationRef>) -> Self {
        Self {
            id: row.id,
            skills: row.skills.unwrap_or_default(),
            saved_jobs: row.saved_jobs.unwrap_or_default(),
            applications,
        }
    }

    pub fn has_saved(&self, job_id: Uuid) -> bool {
        self.saved_jobs.contains(&job_id)
    }

    pub fn has_applied(&self, job_id: Uuid) -> bool {
        self.applications
            .iter()
            .any(|app| app.job_id == Some(job_id))
    }
}
