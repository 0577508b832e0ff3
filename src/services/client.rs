//! HTTP client service
//!
//! Encapsulates HTTP communication with the question-answering backend

use crate::config::Settings;
use crate::models::{ApiResponse, BackendAnswer};
use crate::utils::error::{AppError, AppResult};
use anyhow::{Context, Result};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Client for the backend `/query` endpoint
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client instance
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.backend.timeout))
            .user_agent(concat!("healthchat/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.backend.base_url.clone(),
        })
    }

    /// Forward a question to the backend as a URL-encoded query parameter
    ///
    /// One call, no retry. A non-success status or a body missing the answer
    /// text or source tag is reported as an error.
    pub async fn query(&self, question: &str) -> AppResult<ApiResponse> {
        debug!("Forwarding question to backend");

        let url = format!("{}/query", self.base_url);

        let response = self
            .client
            .post(&url)
            .query(&[("user_input", question)])
            .header("Accept", "application/json")
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Validate the backend response and reshape it into the chat contract
    async fn handle_response(&self, response: Response) -> AppResult<ApiResponse> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Backend request failed: {} - {}", status, error_text);
            return Err(AppError::Backend(error_text));
        }

        let answer: BackendAnswer = response.json().await?;

        answer.into_api_response().ok_or_else(|| {
            error!("Backend returned success status with incomplete body");
            AppError::InvalidBackendResponse
        })
    }
}
