//! Reqwest implementation of the [`AnalysisClient`] seam. Owns the
//! transport details of the `/analyze` endpoint: the multipart body
//! shape and the configurable base URL.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;

use shared::domain::Document;
use shared::error::ApiErrorBody;
use shared::protocol::{AnalysisReport, AnalyzeResponse};

use crate::error::AnalysisError;
use crate::AnalysisClient;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Environment override for the analysis service base URL.
pub const API_URL_ENV_VAR: &str = "RESUME_ANALYZER_API_URL";

pub struct HttpAnalysisClient {
    http: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Base URL from the environment override, falling back to the
    /// local default. A set-but-blank variable counts as unset.
    pub fn from_env() -> Self {
        let base_url = match std::env::var(API_URL_ENV_VAR) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => DEFAULT_API_URL.to_string(),
        };
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalysisClient for HttpAnalysisClient {
    async fn analyze(
        &self,
        document: &Document,
        context_text: Option<&str>,
    ) -> Result<AnalysisReport, AnalysisError> {
        let file_part = Part::bytes(document.bytes.clone())
            .file_name(document.filename.clone())
            .mime_str(document.format.media_type())
            .map_err(AnalysisError::Transport)?;
        let mut form = Form::new().part("file", file_part);
        if let Some(context_text) = context_text {
            form = form.text("job_description", context_text.to_string());
        }

        let response = self
            .http
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(AnalysisError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .map(|body| body.detail);
            return Err(AnalysisError::UpstreamStatus { status, detail });
        }

        let body: AnalyzeResponse = response
            .json()
            .await
            .map_err(AnalysisError::MalformedResponse)?;
        tracing::debug!(filename = %body.filename, "analysis response received");
        Ok(body.analysis)
    }
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod tests;
