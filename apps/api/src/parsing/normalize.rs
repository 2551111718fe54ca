//! Field extraction from the upstream parser's document into the stable
//! output schema. Every optional path defaults silently; only the top-level
//! containers checked up front are hard requirements.

use serde_json::{Map, Value};

use crate::models::resume::{
    EducationRecord, NormalizedResume, PersonalDetails, WorkExperienceRecord,
};
use crate::parsing::ParseError;

/// Degree strings carrying this marker also carry the specialization in
/// `accreditation.inputStr`. Tied to one observed upstream shape, odd
/// spacing included; do not widen without new requirements.
const SPECIALIZATION_MARKER: &str = "ComputerScience andEngineering";

/// Flattens the upstream document into a [`NormalizedResume`].
///
/// The containers `data`, `data.name`, `data.location`, `data.emails`,
/// `data.phoneNumbers` and `data.education` must be present (possibly empty);
/// their outright absence is a [`ParseError::MissingRequiredStructure`], not
/// a default. Every leaf below them may be missing or null.
pub fn normalize(doc: &Value) -> Result<NormalizedResume, ParseError> {
    let data = doc
        .get("data")
        .and_then(|v| v.as_object())
        .ok_or(ParseError::MissingRequiredStructure("data"))?;

    let name = require_object(data, "name", "data.name")?;
    let location = require_object(data, "location", "data.location")?;
    let emails = require_present(data, "emails", "data.emails")?;
    let phone_numbers = require_present(data, "phoneNumbers", "data.phoneNumbers")?;
    let education = require_array(data, "education", "data.education")?;

    let personal_details = PersonalDetails {
        first_name: str_field(name, "first"),
        last_name: str_field(name, "last"),
        email: first_str(emails),
        mobile: first_str(phone_numbers),
        location: str_field(location, "formatted"),
        company: None,
        nationality: None,
        gender: None,
        // `headShot` sits at the top level of the document, not under `data`.
        profile_photo: doc.get("headShot").cloned().unwrap_or(Value::Null),
        resume: doc
            .get("meta")
            .and_then(|m| m.get("pdf"))
            .cloned()
            .unwrap_or(Value::Null),
        introduction_video: None,
    };

    let education = education.iter().map(extract_education).collect();

    let work_experience = data
        .get("workExperience")
        .and_then(|v| v.as_array())
        .map(|entries| entries.iter().map(extract_work_experience).collect())
        .unwrap_or_default();

    Ok(NormalizedResume {
        personal_details,
        education,
        work_experience,
        projects: Vec::new(),
    })
}

fn extract_education(entry: &Value) -> EducationRecord {
    let degree = entry
        .get("accreditation")
        .and_then(|a| a.get("education"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    // The specialization only rides along in `inputStr` when the degree
    // carries the marker text; any other degree yields an empty field.
    let specialization = if degree.contains(SPECIALIZATION_MARKER) {
        entry
            .get("accreditation")
            .and_then(|a| a.get("inputStr"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    } else {
        String::new()
    };

    let organization = entry
        .get("organization")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    EducationRecord {
        degree,
        specialization,
        // university and institution are two assignments from one source
        // field, not aliases; the duplication is part of the output contract.
        university: organization.to_string(),
        start_year: year_part(date_field(entry, "startDate")),
        end_year: year_part(date_field(entry, "completionDate")),
        grades: entry
            .get("grade")
            .and_then(|g| g.get("raw"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        institution: organization.to_string(),
    }
}

fn extract_work_experience(entry: &Value) -> WorkExperienceRecord {
    let title = entry
        .get("title")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    WorkExperienceRecord {
        // jobTitle and designation both come from `title`, same duplication
        // contract as university/institution.
        job_title: title.to_string(),
        employer: entry
            .get("organization")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        start_date: date_field(entry, "startDate"),
        end_date: date_field(entry, "completionDate"),
        designation: title.to_string(),
        employment_type: entry
            .get("employmentType")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        location: entry
            .get("location")
            .and_then(|l| l.get("formatted"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        experience_summary: entry
            .get("description")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string(),
        current_job: entry
            .get("dates")
            .and_then(|d| d.get("isCurrent"))
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    }
}

fn require_object<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a Map<String, Value>, ParseError> {
    data.get(key)
        .and_then(|v| v.as_object())
        .ok_or(ParseError::MissingRequiredStructure(path))
}

fn require_array<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a Vec<Value>, ParseError> {
    data.get(key)
        .and_then(|v| v.as_array())
        .ok_or(ParseError::MissingRequiredStructure(path))
}

/// The emails/phoneNumbers containers must exist, but a null value is
/// tolerated and reads as empty downstream.
fn require_present<'a>(
    data: &'a Map<String, Value>,
    key: &str,
    path: &'static str,
) -> Result<&'a Value, ParseError> {
    data.get(key).ok_or(ParseError::MissingRequiredStructure(path))
}

fn str_field(map: &Map<String, Value>, key: &str) -> String {
    map.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

fn first_str(value: &Value) -> String {
    value
        .as_array()
        .and_then(|arr| arr.first())
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Reads a date string under the entry's `dates` mapping, empty when any
/// link in the path is missing or null.
fn date_field(entry: &Value, key: &str) -> String {
    entry
        .get("dates")
        .and_then(|d| d.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Text before the first hyphen, so "2021-10-01" becomes "2021".
fn year_part(date: String) -> String {
    date.split('-').next().unwrap_or_default().to_string()
}
