use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::scorer::MatchScorer;
use crate::models::candidate::Candidate;
use crate::models::job::JobPostingRow;

/// Maximum number of recommendations returned per request.
pub const RECOMMENDATION_LIMIT: usize = 12;

pub const DEFAULT_TITLE: &str = "Untitled Job";
pub const DEFAULT_COMPANY: &str = "Unknown Company";
pub const DEFAULT_LOCATION: &str = "Remote";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanySummary {
    pub name: String,
}

/// A job posting decorated for one candidate. Built per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub company: CompanySummary,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub skills: Vec<String>,
    pub match_score: u32,
    pub is_saved: bool,
    pub is_applied: bool,
}

/// Scores every job for `candidate`, orders by score (highest first) and keeps
/// the top [`RECOMMENDATION_LIMIT`]. Jobs with equal scores keep their input
/// order.
///
/// No filtering happens here: callers pass active postings only.
pub fn annotate_and_rank(
    jobs: &[JobPostingRow],
    candidate: &Candidate,
    scorer: &dyn MatchScorer,
) -> Vec<ScoredJob> {
    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .map(|job| annotate(job, candidate, scorer))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(RECOMMENDATION_LIMIT);
    scored
}

fn annotate(job: &JobPostingRow, candidate: &Candidate, scorer: &dyn MatchScorer) -> ScoredJob {
    ScoredJob {
        id: job.id,
        title: or_default(job.title.as_deref(), DEFAULT_TITLE),
        company: CompanySummary {
            name: or_default(job.company_name.as_deref(), DEFAULT_COMPANY),
        },
        location: or_default(job.location.as_deref(), DEFAULT_LOCATION),
        job_type: or_default(job.job_type.as_deref(), DEFAULT_JOB_TYPE),
        skills: job.display_skills().to_vec(),
        match_score: scorer.score(&candidate.skills, job.required_skills()),
        is_saved: candidate.has_saved(job.id),
        is_applied: candidate.has_applied(job.id),
    }
}

/// Blank strings count as missing.
fn or_default(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}
