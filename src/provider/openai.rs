//! OpenAI Provider
//!
//! Strategy provider backed by the OpenAI chat completions API. Failures are
//! never raised to the caller: rate limiting, bad credentials, timeouts and
//! any other API error come back as bracketed error text in the generation.
//! Requests are never retried.

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use super::{Generation, StrategyProvider};
use crate::prompt::SYSTEM_PROMPT;

/// Default OpenAI model
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Error bodies are cut to this many characters before reaching a response
const MAX_ERROR_DETAIL_CHARS: usize = 200;

/// Connection and sampling settings for the OpenAI provider
#[derive(Debug, Clone, PartialEq)]
pub struct OpenAiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 512,
            temperature: 0.7,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Failures of a single completions call
#[derive(Error, Debug)]
enum CallError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Invalid API key")]
    Unauthorized,

    #[error("Request timeout")]
    Timeout,

    #[error("Empty response from OpenAI")]
    EmptyResponse,

    #[error("{0}")]
    Other(String),
}

impl CallError {
    fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => CallError::RateLimited,
            StatusCode::UNAUTHORIZED => CallError::Unauthorized,
            _ => {
                let detail: String = body.chars().take(MAX_ERROR_DETAIL_CHARS).collect();
                CallError::Other(format!("API returned {}: {}", status, detail.trim()))
            }
        }
    }

    /// Text returned to the caller in place of a strategy
    fn user_message(&self) -> String {
        match self {
            CallError::Other(detail) => format!("[OpenAI error: {}]", detail),
            known => format!("[Error: {}]", known),
        }
    }
}

impl From<reqwest::Error> for CallError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            CallError::Timeout
        } else {
            CallError::Other(e.to_string())
        }
    }
}

/// OpenAI chat completions provider
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    settings: OpenAiSettings,
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new(settings: OpenAiSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()?;

        if settings.api_key.is_some() {
            tracing::info!(model = %settings.model, "OpenAI provider initialized");
        } else {
            tracing::warn!("OpenAI API key not provided");
        }

        Ok(Self { settings, client })
    }

    pub fn model_name(&self) -> &str {
        &self.settings.model
    }

    fn api_key(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    /// Internal API call implementation
    async fn call_api(&self, api_key: &str, prompt: &str) -> Result<Generation, CallError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&serde_json::json!({
                "model": &self.settings.model,
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": prompt}
                ],
                "max_tokens": self.settings.max_tokens,
                "temperature": self.settings.temperature
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CallError::from_status(status, &body));
        }

        #[derive(Deserialize)]
        struct Message {
            content: Option<String>,
        }
        #[derive(Deserialize)]
        struct Choice {
            message: Message,
        }
        #[derive(Deserialize)]
        struct Usage {
            total_tokens: Option<u32>,
        }
        #[derive(Deserialize)]
        struct ApiResponse {
            choices: Vec<Choice>,
            usage: Option<Usage>,
        }

        let api_response: ApiResponse = response.json().await?;
        let tokens_used = api_response.usage.and_then(|u| u.total_tokens);
        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(CallError::EmptyResponse)?;

        Ok(Generation {
            text: content,
            tokens_used,
        })
    }
}

#[async_trait]
impl StrategyProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation> {
        let Some(api_key) = self.api_key() else {
            return Ok(Generation::from_text("[Error: OpenAI API key missing]"));
        };

        match self.call_api(api_key, prompt).await {
            Ok(generation) => {
                tracing::info!(
                    tokens_used = ?generation.tokens_used,
                    "OpenAI response generated successfully"
                );
                Ok(generation)
            }
            Err(e) => {
                tracing::error!(error = %e, "OpenAI request failed");
                Ok(Generation::from_text(e.user_message()))
            }
        }
    }

    fn is_available(&self) -> bool {
        self.api_key().is_some()
    }

    fn name(&self) -> &str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> OpenAiProvider {
        OpenAiProvider::new(OpenAiSettings {
            api_key: api_key.map(str::to_string),
            // Unroutable: any network attempt would fail loudly
            base_url: "http://127.0.0.1:9".to_string(),
            ..OpenAiSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = OpenAiSettings::default();
        assert_eq!(settings.model, DEFAULT_MODEL);
        assert_eq!(settings.max_tokens, 512);
        assert_eq!(settings.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_availability_follows_key() {
        assert!(!provider(None).is_available());
        assert!(!provider(Some("   ")).is_available());
        assert!(provider(Some("sk-test")).is_available());
        assert_eq!(provider(None).name(), "openai");
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let generation = provider(None).generate("any prompt").await.unwrap();
        assert_eq!(generation.text, "[Error: OpenAI API key missing]");
        assert_eq!(generation.tokens_used, None);
    }

    #[test]
    fn test_completions_url() {
        let p = OpenAiProvider::new(OpenAiSettings {
            base_url: "https://example.test/v1/".to_string(),
            ..OpenAiSettings::default()
        })
        .unwrap();
        assert_eq!(p.completions_url(), "https://example.test/v1/chat/completions");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CallError::from_status(StatusCode::TOO_MANY_REQUESTS, "").user_message(),
            "[Error: Rate limit exceeded. Please try again later.]"
        );
        assert_eq!(
            CallError::from_status(StatusCode::UNAUTHORIZED, "").user_message(),
            "[Error: Invalid API key]"
        );
        assert_eq!(
            CallError::from_status(StatusCode::BAD_GATEWAY, " upstream down ").user_message(),
            "[OpenAI error: API returned 502 Bad Gateway: upstream down]"
        );
        assert_eq!(CallError::Timeout.user_message(), "[Error: Request timeout]");
        assert_eq!(
            CallError::EmptyResponse.user_message(),
            "[Error: Empty response from OpenAI]"
        );
    }

    #[test]
    fn test_error_detail_truncated() {
        let body = "x".repeat(1000);
        let message = CallError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body).user_message();
        assert!(message.len() < 300);
    }
}
