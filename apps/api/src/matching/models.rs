//! Request/response entities for the matching API. All fields are free text;
//! nothing here outlives one request/response cycle.

use serde::{Deserialize, Serialize};

/// Caller-submitted student attributes used to build the prompt.
/// Only `name` and `major` are validated (non-empty after trimming);
/// every other field is passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub major: String,
    pub gpa: String,
    pub year: String,
    pub interests: String,
    pub background: String,
}

/// One scholarship entry as reshaped from the model's output.
/// No validation of factual accuracy, link liveness, or deadline format —
/// `deadline` may be "Rolling", `amount` is free text like "$20,000".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipMatch {
    pub title: String,
    pub amount: String,
    pub link: String,
    pub deadline: String,
    pub eligibility: String,
    pub description: Option<String>,
}

/// Aggregate returned by POST /api/match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipResponse {
    pub scholarships: Vec<ScholarshipMatch>,
    /// Invariant: always equals `scholarships.len()`.
    pub total_found: usize,
    /// Echo of the originating profile, unchanged.
    pub search_criteria: StudentProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = StudentProfile {
            name: "Jane Doe".to_string(),
            major: "Computer Science".to_string(),
            gpa: "3.8".to_string(),
            year: "Junior".to_string(),
            interests: "AI, robotics".to_string(),
            background: "First-generation college student".to_string(),
        };
        let json = serde_json::to_string(&profile).unwrap();
        let recovered: StudentProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, profile);
    }

    #[test]
    fn test_profile_requires_all_fields_in_json() {
        // The inbound contract has six mandatory string fields.
        let bad_json = r#"{"name": "Jane", "major": "CS"}"#;
        let result: Result<StudentProfile, _> = serde_json::from_str(bad_json);
        assert!(result.is_err());
    }

    #[test]
    fn test_match_serializes_missing_description_as_null() {
        let m = ScholarshipMatch {
            title: "STEM Award".to_string(),
            amount: "$5,000".to_string(),
            link: "https://example.org/stem".to_string(),
            deadline: "Rolling".to_string(),
            eligibility: "Undergraduates in STEM majors".to_string(),
            description: None,
        };
        let value = serde_json::to_value(&m).unwrap();
        assert!(value["description"].is_null());
    }
}
