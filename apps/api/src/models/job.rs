use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status value of postings that are open for applications.
pub const ACTIVE_STATUS: &str = "active";

/// A job posting joined with its company name.
///
/// Most columns are nullable because postings created by older clients did not
/// always fill them in. Presentation defaults are applied by the consumer.
///
/// `required_skills` is the canonical list used for scoring. `skills` is the
/// display list shown on job cards and is never scored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPostingRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub company_id: Option<Uuid>,
    pub company_name: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl JobPostingRow {
    pub fn required_skills(&self) -> &[String] {
        self.required_skills.as_deref().unwrap_or_default()
    }

    pub fn display_skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}
