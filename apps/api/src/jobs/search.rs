use serde::Deserialize;

use crate::models::job::JobPostingRow;

/// Query string of `GET /api/v1/job`.
///
/// `keyword` is a case-insensitive substring search over title, description
/// and location. The facets take comma-separated values and keep jobs whose
/// field equals one of them exactly; `industry` is matched against the title.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct JobSearchQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub industry: Option<String>,
    pub salary: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct JobFilter {
    keyword: Option<String>,
    locations: Vec<String>,
    industries: Vec<String>,
    salaries: Vec<String>,
}

impl JobFilter {
    pub fn from_query(query: &JobSearchQuery) -> Self {
        Self {
            keyword: query
                .keyword
                .as_deref()
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_lowercase),
            locations: split_facet(query.location.as_deref()),
            industries: split_facet(query.industry.as_deref()),
            salaries: split_facet(query.salary.as_deref()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none()
            && self.locations.is_empty()
            && self.industries.is_empty()
            && self.salaries.is_empty()
    }

    pub fn matches(&self, job: &JobPostingRow) -> bool {
        self.matches_keyword(job)
            && facet_allows(&self.locations, job.location.as_deref())
            && facet_allows(&self.industries, job.title.as_deref())
            && facet_allows(&self.salaries, job.salary.as_deref())
    }

    fn matches_keyword(&self, job: &JobPostingRow) -> bool {
        let Some(keyword) = &self.keyword else {
            return true;
        };
        [&job.title, &job.description, &job.location]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(keyword.as_str()))
    }
}

/// Keeps the jobs accepted by `filter`, preserving order.
pub fn filter_jobs(jobs: Vec<JobPostingRow>, filter: &JobFilter) -> Vec<JobPostingRow> {
    if filter.is_empty() {
        return jobs;
    }
    jobs.into_iter().filter(|job| filter.matches(job)).collect()
}

fn split_facet(raw: Option<&str>) -> Vec<String> {
    raw.map(|r| {
        r.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}

/// An empty facet accepts everything; otherwise the field must be present and
/// equal one of the values.
fn facet_allows(values: &[String], field: Option<&str>) -> bool {
    values.is_empty() || field.is_some_and(|f| values.iter().any(|v| v == f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_job(title: &str, location: &str, salary: Option<&str>) -> JobPostingRow {
        JobPostingRow {
            id: Uuid::new_v4(),
            title: Some(title.to_string()),
            description: Some(format!("{title} role, hybrid")),
            location: Some(location.to_string()),
            job_type: None,
            salary: salary.map(String::from),
            company_id: None,
            company_name: None,
            required_skills: None,
            skills: None,
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    fn titles(jobs: &[JobPostingRow]) -> Vec<&str> {
        jobs.iter().filter_map(|j| j.title.as_deref()).collect()
    }

    fn sample() -> Vec<JobPostingRow> {
        vec![
            make_job("Frontend Developer", "Delhi NCR", Some("0-40k")),
            make_job("Backend Developer", "Bangalore", Some("42-1lakh")),
            make_job("Data Science", "Mumbai", None),
            make_job("Fullstack Developer", "Bangalore", Some("1lakh to 5lakh")),
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        let filter = JobFilter::from_query(&JobSearchQuery::default());
        assert!(filter.is_empty());
        assert_eq!(filter_jobs(sample(), &filter).len(), 4);
    }

    #[test]
    fn test_blank_keyword_is_ignored() {
        let filter = JobFilter::from_query(&JobSearchQuery {
            keyword: Some("   ".to_string()),
            ..Default::default()
        });
        assert!(filter.is_empty());
    }

    #[test]
    fn test_keyword_is_case_insensitive_over_title_description_location() {
        let by_title = JobFilter::from_query(&JobSearchQuery {
            keyword: Some("DEVELOPER".to_string()),
            ..Default::default()
        });
        assert_eq!(
            titles(&filter_jobs(sample(), &by_title)),
            vec!["Frontend Developer", "Backend Developer", "Fullstack Developer"]
        );

        let by_location = JobFilter::from_query(&JobSearchQuery {
            keyword: Some("mumbai".to_string()),
            ..Default::default()
        });
        assert_eq!(titles(&filter_jobs(sample(), &by_location)), vec!["Data Science"]);

        let by_description = JobFilter::from_query(&JobSearchQuery {
            keyword: Some("hybrid".to_string()),
            ..Default::default()
        });
        assert_eq!(filter_jobs(sample(), &by_description).len(), 4);
    }

    #[test]
    fn test_location_facet_is_exact_membership() {
        let filter = JobFilter::from_query(&JobSearchQuery {
            location: Some("Bangalore, Mumbai".to_string()),
            ..Default::default()
        });
        assert_eq!(
            titles(&filter_jobs(sample(), &filter)),
            vec!["Backend Developer", "Data Science", "Fullstack Developer"]
        );

        let partial = JobFilter::from_query(&JobSearchQuery {
            location: Some("Bangal".to_string()),
            ..Default::default()
        });
        assert!(filter_jobs(sample(), &partial).is_empty());
    }

    #[test]
    fn test_industry_facet_matches_title() {
        let filter = JobFilter::from_query(&JobSearchQuery {
            industry: Some("Data Science".to_string()),
            ..Default::default()
        });
        assert_eq!(titles(&filter_jobs(sample(), &filter)), vec!["Data Science"]);
    }

    #[test]
    fn test_salary_facet_excludes_jobs_without_salary() {
        let filter = JobFilter::from_query(&JobSearchQuery {
            salary: Some("0-40k,42-1lakh".to_string()),
            ..Default::default()
        });
        assert_eq!(
            titles(&filter_jobs(sample(), &filter)),
            vec!["Frontend Developer", "Backend Developer"]
        );
    }

    #[test]
    fn test_facets_combine_with_and() {
        let filter = JobFilter::from_query(&JobSearchQuery {
            keyword: Some("developer".to_string()),
            location: Some("Bangalore".to_string()),
            salary: Some("1lakh to 5lakh".to_string()),
            ..Default::default()
        });
        assert_eq!(titles(&filter_jobs(sample(), &filter)), vec!["Fullstack Developer"]);
    }
}
