//! HTTP client for the `/upload` and `/draft` endpoints

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::export::DraftPayload;
use crate::types::ExtractionRecord;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Error type for backend calls.
///
/// The upload UI collapses all three variants into one notification, but
/// the structured variant is what gets logged.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the extraction backend.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    /// Create a new client with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Create a client from environment configuration.
    ///
    /// `API_URL` sets the backend base URL and `REQUEST_TIMEOUT_SECS` the
    /// per-request timeout.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(base_url, Duration::from_secs(timeout))
    }

    /// Send a brochure to the extractor and parse the resulting record.
    ///
    /// One multipart POST with a single `file` field; any non-2xx status
    /// carries the response text as diagnostic. No retry, no partial
    /// progress.
    pub async fn upload_brochure(
        &self,
        file_name: String,
        bytes: Vec<u8>,
    ) -> Result<ExtractionRecord, ClientError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await?;
        read_json(response).await
    }

    /// Persist an edited draft on the backend.
    ///
    /// The response status is inspected; the body is not.
    pub async fn save_draft(&self, payload: &DraftPayload) -> Result<(), ClientError> {
        let response = self
            .client
            .post(format!("{}/draft", self.base_url))
            .json(payload)
            .timeout(self.timeout)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
