/// Affinda client — the single point of entry for all calls to the external
/// resume-parsing service.
///
/// ARCHITECTURAL RULE: no other module may call the Affinda API directly.
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum AffindaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Raw outcome of a parse submission. The status is reported alongside the
/// body so the caller decides how to treat non-success responses; this module
/// never judges them.
#[derive(Debug)]
pub struct ParseSubmission {
    pub status: u16,
    pub body: String,
}

/// The single client used for all resume submissions.
#[derive(Clone)]
pub struct AffindaClient {
    client: Client,
    url: String,
    api_key: String,
}

impl AffindaClient {
    pub fn new(url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            url,
            api_key,
        }
    }

    /// Submits an uploaded file for parsing and returns the upstream status
    /// plus raw body text. Transport failures are the only error case here.
    /// Single pass-through call: no retries.
    pub async fn submit_resume(
        &self,
        file_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> Result<ParseSubmission, AffindaError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec())
            .file_name(file_name.to_string())
            .mime_str(content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Parsing service responded with status {status} ({} bytes)", body.len());

        Ok(ParseSubmission { status, body })
    }
}
