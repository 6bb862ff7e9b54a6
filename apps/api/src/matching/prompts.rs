//! Prompt constants and builder for the scholarship matching call.

use crate::matching::models::StudentProfile;

/// Matching prompt template. Replace `{name}`, `{major}`, `{gpa}`, `{year}`,
/// `{interests}`, `{background}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"You are an expert scholarship advisor and education data researcher.
Using up-to-date information from legitimate U.S. sources (universities, foundations, companies, or government programs),
identify 5-8 real scholarships that are **currently open** and match this student's profile.

Student Profile:
- Name: {name}
- Major: {major}
- GPA: {gpa}
- Year: {year}
- Interests: {interests}
- Background: {background}

Rules:
1. Only include scholarships that are currently accepting applications.
2. Focus on relevance to the student's background, major, and interests.
3. Include a mix of merit-based, need-based, and demographic/field-specific awards.
4. Verify that each scholarship is legitimate and includes a working URL.
5. Use real deadlines or note 'Rolling' if unspecified.
6. Return only a JSON array - no markdown, no preamble.

JSON Format Example:
[
    {
        "title": "Coca-Cola Scholars Program",
        "amount": "$20,000",
        "link": "https://www.coca-colascholarsfoundation.org/",
        "deadline": "October 31, 2025",
        "eligibility": "High school seniors with strong academics and leadership achievements.",
        "description": "Prestigious national scholarship supporting leadership and academic excellence."
    }
]"#;

/// Builds the matching prompt, embedding every profile field verbatim.
pub fn build_match_prompt(profile: &StudentProfile) -> String {
    MATCH_PROMPT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{major}", &profile.major)
        .replace("{gpa}", &profile.gpa)
        .replace("{year}", &profile.year)
        .replace("{interests}", &profile.interests)
        .replace("{background}", &profile.background)
}
