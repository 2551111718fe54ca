use serde::Serialize;
use serde_json::Value;

/// The stable output schema returned to downstream consumers, regardless of
/// variations or omissions in the upstream parser's document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResume {
    pub personal_details: PersonalDetails,
    pub education: Vec<EducationRecord>,
    pub work_experience: Vec<WorkExperienceRecord>,
    /// Project-section extraction is disabled upstream; the field stays so
    /// the output shape never changes.
    pub projects: Vec<Value>,
}

/// Fields the upstream schema cannot populate (company, nationality, gender,
/// introductionVideo) are kept as always-null so consumers see a fixed shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub location: String,
    pub company: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<String>,
    pub profile_photo: Value,
    pub resume: Value,
    pub introduction_video: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub degree: String,
    pub specialization: String,
    pub university: String,
    pub start_year: String,
    pub end_year: String,
    pub grades: String,
    pub institution: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceRecord {
    pub job_title: String,
    pub employer: String,
    pub start_date: String,
    pub end_date: String,
    pub designation: String,
    pub employment_type: String,
    pub location: String,
    pub experience_summary: String,
    pub current_job: bool,
}
