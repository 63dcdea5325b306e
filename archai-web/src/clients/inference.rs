//! Inference backend client
//!
//! Submits one multipart batch per analysis run and maps the backend's
//! responses into typed outcomes. The backend is an opaque collaborator:
//! no retries, no partial resubmission, the whole batch succeeds or fails
//! as one HTTP exchange.

use archai_common::api::types::{AnalysisResponse, BackendErrorDetail, Category, SelectedFile};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = "ArchAI/0.1.0 (archai front end)";

/// Per-request upper bound; analysis of a large batch can take a while
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Multipart field name the backend expects for each file
const FILE_FIELD: &str = "files";

/// Inference client errors
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Network error: {0}")]
    Network(String),

    /// Batch-level failure reported by the backend's `detail` field
    #[error("{0}")]
    Backend(String),

    /// Non-success HTTP status without a recognizable `detail` body
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// 2xx response whose body is not a recognizable batch result
    #[error("Analysis backend returned an unrecognized response")]
    UnrecognizedResponse,
}

impl InferenceError {
    /// Single user-visible message for the failed batch
    ///
    /// The server's error detail when present, otherwise the raw transport
    /// error text.
    pub fn user_message(&self) -> String {
        match self {
            InferenceError::Network(msg) => msg.clone(),
            InferenceError::Backend(detail) => detail.clone(),
            InferenceError::Api(status, _) => {
                format!("Analysis backend returned HTTP {}", status)
            }
            InferenceError::UnrecognizedResponse => self.to_string(),
        }
    }
}

/// HTTP client for the inference backend
pub struct InferenceClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl InferenceClient {
    pub fn new(base_url: String) -> Result<Self, InferenceError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL this client submits to (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit one batch of files for analysis
    ///
    /// All files go out as repeated `files` parts of a single multipart
    /// request to the category's endpoint.
    pub async fn analyze(
        &self,
        category: Category,
        files: Vec<SelectedFile>,
    ) -> Result<AnalysisResponse, InferenceError> {
        let url = format!("{}{}", self.base_url, category.endpoint_path());

        tracing::debug!(
            url = %url,
            category = %category,
            files = files.len(),
            "Calling inference backend"
        );

        let mut form = reqwest::multipart::Form::new();
        for file in files {
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.filename)
                .mime_str(&file.content_type)
                .map_err(|e| InferenceError::Network(format!("invalid content type: {}", e)))?;
            form = form.part(FILE_FIELD, part);
        }

        let response = self
            .http_client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(err) = serde_json::from_str::<BackendErrorDetail>(&body) {
                return Err(InferenceError::Backend(err.detail));
            }
            return Err(InferenceError::Api(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| InferenceError::Network(e.to_string()))?;

        let batch: AnalysisResponse = serde_json::from_str(&body)
            .map_err(|_| InferenceError::UnrecognizedResponse)?;

        tracing::info!(
            category = %category,
            processed = batch.processed,
            total_files = batch.total_files,
            "Analysis batch completed"
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = InferenceClient::new("http://localhost:8000".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = InferenceClient::new("http://localhost:8000/".to_string()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = InferenceError::Backend("No files uploaded".to_string());
        assert_eq!(err.user_message(), "No files uploaded");
    }

    #[test]
    fn user_message_for_status_error_names_the_status() {
        let err = InferenceError::Api(503, "<html>gateway</html>".to_string());
        assert_eq!(err.user_message(), "Analysis backend returned HTTP 503");
    }
}
