//! LLM request/response types for AskDesk.
//!
//! Provider-agnostic shapes for a single, non-streaming chat completion.
//! Wire formats for a concrete API live in `askdesk-infra`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

/// Request to an LLM provider for a completion.
///
/// An empty `model` means "use the provider's configured model".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Text of the first completion choice returned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub content: String,
    pub model: Option<String>,
}

/// Errors from LLM provider operations.
///
/// None of these ever reach an end user as an error: the model proxy turns
/// each variant into a descriptive reply.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    /// Connection failure, timeout, or any other transport-level error.
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status from the service.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },

    /// The service answered with an `error` payload.
    #[error("{0}")]
    Service(String),

    /// The body did not have the expected shape.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
