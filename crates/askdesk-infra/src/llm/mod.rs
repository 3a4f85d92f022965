//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](askdesk_core::llm::provider::LlmProvider)
//! for OpenAI-compatible chat completion endpoints and a factory
//! ([`create_provider`]) that only builds one when a credential is available.

pub mod chat_completions;

use secrecy::SecretString;

use askdesk_types::config::ModelConfig;
use askdesk_types::llm::LlmError;

use self::chat_completions::ChatCompletionsProvider;

/// Create a provider from `config` and an already-resolved credential.
///
/// Returns `Ok(None)` when there is no credential: the model proxy then
/// answers with its "disabled" message instead of calling out.
pub fn create_provider(
    config: &ModelConfig,
    api_key: Option<SecretString>,
) -> Result<Option<ChatCompletionsProvider>, LlmError> {
    match api_key {
        Some(key) => Ok(Some(ChatCompletionsProvider::new(key, config)?)),
        None => Ok(None),
    }
}
