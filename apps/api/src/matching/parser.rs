//! Permissive decode of the model's free-text answer into typed records.
//!
//! Leniency is confined to this boundary: each field of an array element is
//! optional-with-default at decode time, but the text as a whole must be a
//! JSON array or the decode fails.

use serde::Deserialize;

use crate::llm_client::strip_json_fences;
use crate::matching::models::ScholarshipMatch;

/// Decode-time shape: every field defaults when missing. Extra fields are
/// ignored; a missing field never fails the element.
#[derive(Debug, Deserialize)]
struct RawScholarship {
    #[serde(default)]
    title: String,
    #[serde(default)]
    amount: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    deadline: String,
    #[serde(default)]
    eligibility: String,
    #[serde(default)]
    description: Option<String>,
}

impl From<RawScholarship> for ScholarshipMatch {
    fn from(raw: RawScholarship) -> Self {
        ScholarshipMatch {
            title: raw.title,
            amount: raw.amount,
            link: raw.link,
            deadline: raw.deadline,
            eligibility: raw.eligibility,
            description: raw.description,
        }
    }
}

/// Parses raw model output into scholarship records.
///
/// Tolerates a markdown code fence around the payload. Fails if the remaining
/// text is not a JSON array; an empty array is a valid (empty) result.
pub fn parse_scholarships(raw_text: &str) -> Result<Vec<ScholarshipMatch>, serde_json::Error> {
    let text = strip_json_fences(raw_text);
    let raw: Vec<RawScholarship> = serde_json::from_str(text)?;
    Ok(raw.into_iter().map(ScholarshipMatch::from).collect())
}
