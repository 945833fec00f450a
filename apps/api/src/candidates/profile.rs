use serde::Deserialize;

use crate::candidates::skills::{parse_skills, SkillsInput};

/// Body of `PUT /api/v1/user/profile`. Every field is optional.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProfileUpdateRequest {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<SkillsInput>,
}

/// The columns to overwrite. `None` leaves the stored value untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProfileUpdate {
    pub fullname: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
}

impl ProfileUpdate {
    /// Blank values, including a skills input with no non-blank entries, mean
    /// "no change" rather than "clear".
    pub fn from_request(request: ProfileUpdateRequest) -> Self {
        Self {
            fullname: non_blank(request.fullname),
            email: non_blank(request.email),
            phone_number: non_blank(request.phone_number),
            bio: non_blank(request.bio),
            skills: request
                .skills
                .map(parse_skills)
                .filter(|skills| !skills.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> ProfileUpdate {
        let request: ProfileUpdateRequest = serde_json::from_str(body).unwrap();
        ProfileUpdate::from_request(request)
    }

    #[test]
    fn test_empty_skills_string_leaves_skills_alone() {
        let update = parse(r#"{"skills": ""}"#);
        assert_eq!(update.skills, None);
        assert!(update.is_empty());
    }

    #[test]
    fn test_blank_skills_entries_leave_skills_alone() {
        assert_eq!(parse(r#"{"skills": " , ,"}"#).skills, None);
        assert_eq!(parse(r#"{"skills": []}"#).skills, None);
    }

    #[test]
    fn test_skills_csv_replaces_list() {
        let update = parse(r#"{"skills": "Rust, Go"}"#);
        assert_eq!(update.skills, Some(vec!["Rust".to_string(), "Go".to_string()]));
    }

    #[test]
    fn test_only_present_fields_are_updated() {
        let update = parse(r#"{"fullname": " Ada Lovelace ", "bio": "", "email": null}"#);
        assert_eq!(update.fullname.as_deref(), Some("Ada Lovelace"));
        assert_eq!(update.bio, None);
        assert_eq!(update.email, None);
        assert_eq!(update.phone_number, None);
        assert!(!update.is_empty());
    }

    #[test]
    fn test_all_fields() {
        let update = parse(
            r#"{
                "fullname": "Ada",
                "email": "ada@example.com",
                "phone_number": "+44 20 7946 0000",
                "bio": "Analyst",
                "skills": ["Rust"]
            }"#,
        );
        assert_eq!(
            update,
            ProfileUpdate {
                fullname: Some("Ada".to_string()),
                email: Some("ada@example.com".to_string()),
                phone_number: Some("+44 20 7946 0000".to_string()),
                bio: Some("Analyst".to_string()),
                skills: Some(vec!["Rust".to_string()]),
            }
        );
    }
}
