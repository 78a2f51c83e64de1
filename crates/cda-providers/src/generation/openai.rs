//! OpenAI Generation Provider
//!
//! Implements the GenerationProvider port against the chat-completions API.
//! Works with OpenAI directly or any compatible endpoint via a custom base
//! URL.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use cda_application::ports::providers::{GenerationProvider, GenerationRequest};
use cda_domain::error::{Error, Result};
use cda_domain::value_objects::StageKind;

/// Default base URL when none is configured
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI generation provider
///
/// Receives its HTTP client via constructor injection so callers control
/// pooling and TLS setup.
pub struct OpenAiGenerationProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    temperature: f32,
    timeout: Duration,
    http_client: Client,
}

impl OpenAiGenerationProvider {
    /// Create a new OpenAI generation provider
    ///
    /// # Arguments
    /// * `api_key` - API key sent as a Bearer token
    /// * `base_url` - Optional custom base URL (defaults to the OpenAI API)
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    /// * `temperature` - Sampling temperature
    /// * `timeout` - Per-request timeout
    /// * `http_client` - Reqwest HTTP client
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        temperature: f32,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let base_url = base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self {
            api_key,
            base_url,
            model,
            temperature,
            timeout,
            http_client,
        }
    }

    /// Base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Model name
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn fetch_completion(&self, request: &GenerationRequest) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "model": self.model,
            "temperature": self.temperature,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user},
            ],
        });

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::generation(format!("Request timed out after {:?}", self.timeout))
                } else {
                    Error::generation_with_source("HTTP request failed", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::generation(format!(
                "OpenAI API error {status}: {}",
                body.chars().take(500).collect::<String>()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::generation_with_source("Invalid JSON response", e))
    }
}

#[async_trait]
impl GenerationProvider for OpenAiGenerationProvider {
    async fn generate(&self, stage: StageKind, request: &GenerationRequest) -> Result<String> {
        let response = self.fetch_completion(request).await?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                Error::generation("Invalid response format: missing choices[0].message.content")
            })?;
        if content.trim().is_empty() {
            return Err(Error::generation("Model returned an empty completion"));
        }

        debug!(
            stage = %stage,
            model = %self.model,
            output_chars = content.chars().count(),
            "completion received"
        );
        Ok(content.to_string())
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
