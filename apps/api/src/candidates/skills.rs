use serde::Deserialize;

/// Skills as submitted by profile forms: either a comma-separated string
/// ("Rust, Go, SQL") or a JSON array.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SkillsInput {
    Csv(String),
    List(Vec<String>),
}

/// Normalizes submitted skills into a list: trimmed, blanks dropped, order kept.
///
/// Blank skills are dropped because an empty string is a substring of every
/// job skill and would match all of them.
pub fn parse_skills(input: SkillsInput) -> Vec<String> {
    let raw: Vec<String> = match input {
        SkillsInput::Csv(csv) => csv.split(',').map(String::from).collect(),
        SkillsInput::List(list) => list,
    };
    raw.into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_is_split_and_trimmed() {
        let skills = parse_skills(SkillsInput::Csv(" Rust, Go ,SQL".to_string()));
        assert_eq!(skills, vec!["Rust", "Go", "SQL"]);
    }

    #[test]
    fn test_list_is_trimmed() {
        let skills = parse_skills(SkillsInput::List(vec![
            " React ".to_string(),
            "Node.js".to_string(),
        ]));
        assert_eq!(skills, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_blank_entries_dropped() {
        let skills = parse_skills(SkillsInput::Csv("Rust,, ,Go,".to_string()));
        assert_eq!(skills, vec!["Rust", "Go"]);
        assert!(parse_skills(SkillsInput::Csv(String::new())).is_empty());
    }

    #[test]
    fn test_deserializes_string_or_array() {
        let csv: SkillsInput = serde_json::from_str(r#""Rust, Go""#).unwrap();
        assert_eq!(csv, SkillsInput::Csv("Rust, Go".to_string()));

        let list: SkillsInput = serde_json::from_str(r#"["Rust", "Go"]"#).unwrap();
        assert_eq!(list, SkillsInput::List(vec!["Rust".to_string(), "Go".to_string()]));
    }
}
