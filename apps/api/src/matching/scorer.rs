//! Match scoring — how well a candidate's skills cover a job's required skills.
//!
//! Default: `SubstringMatchScorer` (case-insensitive substring containment in
//! either direction). "React" matches "ReactJS", and so does "Java" match
//! "JavaScript"; recall is preferred over precision here.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>` so the matching rule can be
//! swapped without touching the ranking or the handler.

use std::collections::HashSet;

/// Upper bound of a match score.
pub const MAX_SCORE: u32 = 100;

/// Computes a 0–100 compatibility score between two skill lists.
///
/// Implementations must be pure: no I/O, no shared mutable state.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate_skills: &[String], job_required_skills: &[String]) -> u32;

    /// Short label reported in logs.
    fn backend(&self) -> &'static str;
}

pub struct SubstringMatchScorer;

impl MatchScorer for SubstringMatchScorer {
    fn score(&self, candidate_skills: &[String], job_required_skills: &[String]) -> u32 {
        score(candidate_skills, job_required_skills)
    }

    fn backend(&self) -> &'static str {
        "substring"
    }
}

/// Scores `candidate_skills` against `job_required_skills`.
///
/// Algorithm:
/// 1. Lowercase both lists; drop repeated candidate skills.
/// 2. A candidate skill matches when it contains, or is contained in, at
///    least one job skill. Each candidate skill counts once.
/// 3. score = round(matched / |job skills| × 100), clamped to 100.
///
/// A job without required skills scores 0.
pub fn score(candidate_skills: &[String], job_required_skills: &[String]) -> u32 {
    if job_required_skills.is_empty() {
        return 0;
    }

    let job_skills: Vec<String> = job_required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut seen = HashSet::new();
    let match_count = candidate_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|c| seen.insert(c.clone()))
        .filter(|c| job_skills.iter().any(|j| skills_match(c, j)))
        .count();

    let percentage = (match_count as f64 / job_skills.len() as f64 * 100.0).round() as u32;

    // Several candidate skills can hit the same job skill ("react", "reactjs"
    // vs "react"), which would otherwise push the ratio past 1.
    percentage.min(MAX_SCORE)
}

/// Containment test on already-lowercased skills.
pub fn skills_match(candidate: &str, job: &str) -> bool {
    job.contains(candidate) || candidate.contains(job)
}
