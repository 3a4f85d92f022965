//! LlmProvider trait definition.

use askdesk_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in askdesk-infra (e.g., `ChatCompletionsProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the first choice's text.
    ///
    /// One attempt only; implementations must not retry.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
