//! Completion client for OpenAI-compatible chat endpoints.
//!
//! The [`CompletionClient`] trait is the seam between the chat flow and
//! the remote model: the real implementation is an HTTP client, and
//! tests substitute a mock. The call is a single attempt with a
//! configured timeout; a failed call surfaces one error string to the
//! user and nothing is retried.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::models::ChatMessage;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Grounding instruction sent as the first system message.
pub const SYSTEM_PROMPT: &str = "\
You are a document assistant that answers questions strictly based on the provided document context.
Rules:
- Use ONLY the provided document context to answer.
- If the answer is not found in the context, clearly say it is not available in the provided documents.
- Break complex ideas into steps or bullet points when helpful.
- Keep explanations clear, structured, and easy to understand.
Do not add outside knowledge. Do not guess. Stay within the document content.";

/// Backend that turns a message list into a model reply.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the conversation and return the model's reply text.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct HttpCompletionClient {
    client: reqwest::Client,
    config: ApiConfig,
    api_key: String,
}

impl HttpCompletionClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `GROQ_API_KEY` is not in the environment or
    /// the underlying HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| anyhow::anyhow!("{} environment variable not set", API_KEY_ENV))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
        });

        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Completion request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            bail!("Completion API error {}: {}", status, body_text);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .context("Failed to read completion response")?;
        parse_completion_response(&json)
    }
}

/// Extract the reply text (`choices[0].message.content`) from a
/// chat-completions response body.
fn parse_completion_response(json: &serde_json::Value) -> Result<String> {
    let content = json
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid completion response: missing message content"))?;

    if content.trim().is_empty() {
        bail!("Completion response contained no usable content");
    }

    Ok(content.to_string())
}
