//! Anthropic (Claude) completion provider.

use super::{assemble_messages, ChatMessage, CompletionProvider, ProviderError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic Messages API client.
///
/// Model identifier and the output-token bound are fixed at construction
/// from deployment configuration. The underlying client carries no request
/// timeout; callers needing bounded latency impose one externally.
pub struct AnthropicProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl AnthropicProvider {
    /// Create a provider against the public Anthropic endpoint.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, max_tokens: u32) -> Self {
        Self::with_base_url(api_key, "https://api.anthropic.com", model, max_tokens)
    }

    /// Create with a custom base URL (used by tests and proxies).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
    ) -> Self {
        let api_key = api_key.into();
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
        );
        headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            max_tokens,
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(
        &self,
        system: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/v1/messages", self.base_url);

        let request = AnthropicRequest {
            model: self.model.clone(),
            messages: assemble_messages(history, message)
                .into_iter()
                .map(|m| AnthropicMessage {
                    role: m.role.as_str(),
                    content: m.content,
                })
                .collect(),
            max_tokens: self.max_tokens,
            system: system.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError {
                status_code: e.status().map(|s| s.as_u16()),
                message: format!("request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError {
                status_code: Some(status.as_u16()),
                message: format!("API error: {body}"),
            });
        }

        let parsed: AnthropicResponse = response.json().await.map_err(|e| ProviderError {
            status_code: None,
            message: format!("failed to parse response: {e}"),
        })?;

        // Concatenate the text content blocks
        let reply = parsed
            .content
            .iter()
            .filter_map(|block| {
                if block.content_type == "text" {
                    Some(block.text.as_str())
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        Ok(reply)
    }
}

// ============================================================================
// Anthropic API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    messages: Vec<AnthropicMessage>,
    max_tokens: u32,
    system: String,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}
