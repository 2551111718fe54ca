use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::resume::NormalizedResume;
use crate::parsing::normalize::normalize;
use crate::parsing::unwrap::unwrap_and_parse;
use crate::state::AppState;

/// File extensions accepted for upload. Anything else is rejected before the
/// upstream call.
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "txt", "png", "jpg", "jpeg"];

/// POST /api/v1/resumes/parse
/// Receives a resume file as multipart/form-data under the `file` key,
/// submits it to the external parsing service, and returns the normalized
/// record.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<NormalizedResume>, AppError> {
    let mut file: Option<(String, String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;
            file = Some((file_name, content_type, data));
        }
    }

    let (file_name, content_type, data) = file.ok_or_else(|| {
        AppError::Validation(
            "No file part in the request. Please upload a file with key 'file'.".to_string(),
        )
    })?;

    if file_name.is_empty() {
        return Err(AppError::Validation("No selected file.".to_string()));
    }

    if !allowed_file(&file_name) {
        return Err(AppError::Validation(format!(
            "File type not allowed. Allowed types are: {}",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    info!("Received file: {file_name} ({content_type}). Submitting for parsing.");

    let submission = state
        .affinda
        .submit_resume(&file_name, &content_type, data)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if submission.status == 201 {
        info!("Upstream parser accepted the resume.");
    } else {
        // Failure bodies run through the same unwrap + normalize path as
        // successes; one that does not match the expected schema surfaces
        // as a missing-structure error.
        error!(
            "Upstream parser returned status {}: {}",
            submission.status, submission.body
        );
    }

    let doc = unwrap_and_parse(&submission.body)?;
    let record = normalize(&doc)?;

    Ok(Json(record))
}

/// Checks the uploaded filename against the extension allow-list, using the
/// text after the last dot, case-insensitively.
fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
