//! Completion provider abstraction.
//!
//! Defines the interface the request handler talks to, the conversation wire
//! types, and the normalized provider error. The concrete Anthropic client
//! lives in [`anthropic`].

mod anthropic;

pub use anthropic::AnthropicProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Interface for text-completion backends.
///
/// One invocation makes exactly one outbound call: either a complete reply
/// comes back or a [`ProviderError`] does. There are no retries, no caching,
/// and no streaming.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Provider name, used in logs.
    fn name(&self) -> &str;

    /// Request a completion for the conversation so far.
    ///
    /// `history` is replayed verbatim ahead of the new `message`; the caller
    /// owns the transcript and its growth.
    async fn complete(
        &self,
        system: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> Result<String, ProviderError>;
}

/// Error from a completion provider.
///
/// Transport failures carry no status code; provider-reported failures carry
/// the HTTP status the provider answered with.
#[derive(Debug, Clone)]
pub struct ProviderError {
    pub status_code: Option<u16>,
    pub message: String,
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "HTTP {}: {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ProviderError {}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// Build the ordered message list for a completion call: every history turn
/// verbatim, then the new user message as the final turn.
pub fn assemble_messages(history: &[ChatMessage], message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.extend_from_slice(history);
    messages.push(ChatMessage {
        role: Role::User,
        content: message.to_string(),
    });
    messages
}
