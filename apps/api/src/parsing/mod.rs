pub mod handlers;
pub mod normalize;
pub mod unwrap;

use thiserror::Error;

/// Errors produced by the unwrap + normalize pipeline. Both kinds propagate
/// unchanged to the HTTP layer; there is no retry or partial-result recovery.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("payload is not valid JSON after unwrapping ({source}); starts with: {snippet}")]
    MalformedPayload {
        snippet: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected container '{0}' is missing from the parsed document")]
    MissingRequiredStructure(&'static str),
}

#[cfg(test)]
mod tests {
    use crate::parsing::normalize::normalize;
    use crate::parsing::unwrap::unwrap_and_parse;

    /// A trimmed upstream response in the escaped form some serialization
    /// paths deliver: no outer quote pair, but every inner quote escaped.
    const ESCAPED_RESPONSE: &str = r#"{\"data\":{\"name\":{\"first\":\"Aritra\",\"last\":\"Pattanayak\"},\"emails\":[\"aritra@example.com\"],\"phoneNumbers\":[\"+917082049656\"],\"location\":{\"formatted\":\"Panipat, Haryana, India\"},\"education\":[{\"organization\":\"Kalinga Institute of Industrial Technology\",\"accreditation\":{\"education\":\"B.Tech - ComputerScience andEngineering\",\"inputStr\":\"B.Tech - ComputerScience andEngineering\"},\"grade\":{\"raw\":\"(CGPA - 7.4)\"},\"dates\":{\"startDate\":\"2021-10-01\",\"completionDate\":\"2025-07-24\",\"isCurrent\":true}}],\"workExperience\":[]},\"meta\":{\"pdf\":\"https://example.com/aritra_resume.pdf\"}}"#;

    #[test]
    fn test_escaped_response_normalizes_end_to_end() {
        let doc = unwrap_and_parse(ESCAPED_RESPONSE).unwrap();
        let record = normalize(&doc).unwrap();

        assert_eq!(record.personal_details.first_name, "Aritra");
        assert_eq!(record.personal_details.last_name, "Pattanayak");
        assert_eq!(record.personal_details.email, "aritra@example.com");
        assert_eq!(record.personal_details.mobile, "+917082049656");
        assert_eq!(
            record.personal_details.resume,
            serde_json::json!("https://example.com/aritra_resume.pdf")
        );
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.education[0].start_year, "2021");
        assert_eq!(record.education[0].end_year, "2025");
        assert_eq!(record.education[0].grades, "(CGPA - 7.4)");
        assert_eq!(
            record.education[0].specialization,
            "B.Tech - ComputerScience andEngineering"
        );
        assert!(record.work_experience.is_empty());
        assert!(record.projects.is_empty());
    }
}
