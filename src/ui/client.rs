//! HTTP client for the proxy's chat endpoint

use crate::models::{ApiResponse, ChatRequest};
use anyhow::{anyhow, Result};
use reqwest::Client;

/// Client posting chat requests to the proxy server
#[derive(Debug, Clone)]
pub struct ProxyClient {
    client: Client,
    base_url: String,
}

impl ProxyClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send one question and wait for the answer
    pub async fn send(&self, question: &str) -> Result<ApiResponse> {
        let url = format!("{}/api/chat", self.base_url);

        let request = ChatRequest {
            user_input: question.to_string(),
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Something went wrong. Please try again (check backend or server), Error: {}",
                response.status().as_u16()
            ));
        }

        let answer: ApiResponse = response.json().await?;
        Ok(answer)
    }
}
