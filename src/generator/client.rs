//! Completion Client Module
//!
//! The upstream dependency boundary: one call taking a system instruction
//! and a user prompt, returning one text completion. The pipeline treats
//! failures from this dependency as opaque upstream errors; no retries.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::Config;
use crate::error::{GeneratorError, Result};

// == Completion Client Trait ==
/// Abstraction over the generative-model dependency.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Requests a single text completion for the given system instruction
    /// and user prompt.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

// == OpenAI Client ==
/// OpenAI-compatible chat-completions client.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a client for the given endpoint and model.
    pub fn new(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Creates a client from server configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.openai_api_base.clone(),
            config.openai_api_key.clone(),
            config.openai_model.clone(),
        )
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt }
            ],
            "temperature": 0.7,
            "max_tokens": 4000
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| GeneratorError::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Upstream(format!(
                "completion endpoint returned {}: {}",
                status, detail
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| GeneratorError::Upstream(err.to_string()))?;

        extract_completion(&payload)
    }
}

// == Payload Extraction ==
/// Pulls the completion text out of a chat-completions response body.
fn extract_completion(payload: &Value) -> Result<String> {
    payload["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            GeneratorError::Upstream("completion payload missing message content".to_string())
        })
}
