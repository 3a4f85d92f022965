//! Model proxy: the fallback used when the knowledge table has no answer.
//!
//! The proxy never fails upward. A missing provider (no credential) and every
//! provider error are converted into a human-readable reply so the chat flow
//! always has something to return and to log.

use askdesk_types::config::ModelConfig;
use askdesk_types::llm::{CompletionRequest, LlmError, Message};
use tracing::{debug, warn};

use super::provider::LlmProvider;

/// System instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str = "You are a helpful, friendly AI assistant.\n\
Format your response based on the query:\n\
- If the user asks for steps, return short bullet points (use dashes).\n\
- If the user asks for an explanation, return a compact paragraph.\n\
- Keep it concise, clear, and directly answer the question.\n\
- Use line breaks between bullets; avoid markdown numbering.\n\
- If uncertain, say you are unsure briefly.";

/// Reply when no credential is configured.
pub const DISABLED_MESSAGE: &str = "AI fallback is disabled. To enable it, set GROQ_API_KEY or add api_key under [model] in config.toml.";

/// Reply when the service answered with a body we could not read.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Sorry, I received an unexpected response from the AI service.";

/// Forwards unanswered questions to an external completion service.
pub struct ModelProxy<P: LlmProvider> {
    provider: Option<P>,
    max_tokens: u32,
    temperature: f64,
}

impl<P: LlmProvider> ModelProxy<P> {
    /// Create a proxy. `provider` is `None` when no credential is configured.
    pub fn new(provider: Option<P>, config: &ModelConfig) -> Self {
        Self {
            provider,
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }

    /// Whether a provider (and therefore a credential) is available.
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Build the single-turn request for `text`.
    pub fn build_request(&self, text: &str) -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![Message::system(SYSTEM_PROMPT), Message::user(text)],
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }

    /// Ask the provider about `text`; always returns reply text.
    pub async fn complete(&self, text: &str) -> String {
        let Some(provider) = &self.provider else {
            debug!("No model credential configured, returning disabled message");
            return DISABLED_MESSAGE.to_string();
        };

        let request = self.build_request(text);
        match provider.complete(&request).await {
            Ok(response) => response.content,
            Err(err) => {
                warn!(provider = provider.name(), error = %err, "Model request failed");
                describe_failure(&err)
            }
        }
    }
}

/// Convert a provider error into the text shown to the user.
pub fn describe_failure(err: &LlmError) -> String {
    match err {
        LlmError::Transport(_) | LlmError::Status { .. } => format!(
            "Sorry, I'm having trouble connecting to the AI service. Error: {err}"
        ),
        LlmError::Service(message) => format!("AI service error: {message}"),
        LlmError::UnexpectedResponse(_) => UNEXPECTED_RESPONSE_MESSAGE.to_string(),
    }
}
