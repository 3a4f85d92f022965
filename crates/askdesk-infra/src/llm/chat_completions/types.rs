//! Chat completions wire types.
//!
//! These are API-specific request/response structures. They are NOT the
//! generic LLM types from askdesk-types -- those are provider-agnostic.

use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionBody {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Response body. Either `choices` or `error` is expected; both are optional
/// here so a missing field can be reported instead of failing to parse.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponseBody {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<WireChoice>>,
    #[serde(default)]
    pub error: Option<WireError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireChoice {
    #[serde(default)]
    pub message: Option<WireChoiceMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// The `error` field returned by the service: usually an object with a
/// `message`, occasionally a bare string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireError {
    Text(String),
    Object {
        #[serde(default)]
        message: Option<String>,
    },
}

impl WireError {
    pub fn message(&self) -> Option<&str> {
        match self {
            WireError::Text(text) => Some(text),
            WireError::Object { message } => message.as_deref(),
        }
    }
}

impl ChatCompletionResponseBody {
    /// Text of the first choice, if present.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .message
            .as_ref()?
            .content
            .as_deref()
    }
}
