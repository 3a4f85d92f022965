//! ChatCompletionsProvider -- concrete [`LlmProvider`] for OpenAI-compatible
//! chat completion endpoints.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is only exposed
//! when building the `Authorization` header.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use askdesk_core::llm::provider::LlmProvider;
use askdesk_types::config::ModelConfig;
use askdesk_types::llm::{CompletionRequest, CompletionResponse, LlmError};

use super::types::{ChatCompletionBody, ChatCompletionResponseBody, WireMessage};

/// Chat completions provider.
///
/// Does NOT derive Debug so the API key can never end up in logs.
pub struct ChatCompletionsProvider {
    client: reqwest::Client,
    api_key: SecretString,
    api_url: String,
    model: String,
    provider_name: String,
}

impl ChatCompletionsProvider {
    /// Create a provider for the endpoint and model in `config`.
    ///
    /// The whole request (connect, send, read body) is bounded by
    /// `config.timeout_secs`.
    pub fn new(api_key: SecretString, config: &ModelConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to create HTTP client: {e}")))?;

        let provider_name = if config.api_url.contains("groq.com") {
            "groq"
        } else {
            "openai-compatible"
        };

        Ok(Self {
            client,
            api_key,
            api_url: config.api_url.clone(),
            model: config.model.clone(),
            provider_name: provider_name.to_string(),
        })
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> ChatCompletionBody {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatCompletionBody {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl LlmProvider for ChatCompletionsProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.to_wire_request(request);

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ChatCompletionResponseBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message().map(str::to_string))
                .unwrap_or_else(|| {
                    if text.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        text.trim().to_string()
                    }
                });
            return Err(LlmError::Status {
                status: status.as_u16(),
                detail,
            });
        }

        // A body that is not JSON at all is a transport failure; valid JSON of
        // the wrong shape is an unexpected response.
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| LlmError::Transport(format!("invalid JSON in response body: {e}")))?;
        let parsed: ChatCompletionResponseBody = serde_json::from_value(value)
            .map_err(|e| LlmError::UnexpectedResponse(e.to_string()))?;

        if let Some(error) = &parsed.error {
            return match error.message() {
                Some(message) => Err(LlmError::Service(message.to_string())),
                None => Err(LlmError::UnexpectedResponse(
                    "error payload without message".to_string(),
                )),
            };
        }

        let content = parsed.first_content().ok_or_else(|| {
            LlmError::UnexpectedResponse("missing choices[0].message.content".to_string())
        })?;

        Ok(CompletionResponse {
            content: content.to_string(),
            model: parsed.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askdesk_types::llm::Message;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/openai/v1/chat/completions";

    fn provider_for(server: &MockServer, timeout_secs: u64) -> ChatCompletionsProvider {
        let config = ModelConfig {
            api_url: format!("{}{ENDPOINT}", server.uri()),
            timeout_secs,
            ..ModelConfig::default()
        };
        ChatCompletionsProvider::new(SecretString::from("test-key"), &config).unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: String::new(),
            messages: vec![Message::system("Be brief."), Message::user("What is Rust?")],
            max_tokens: 500,
            temperature: Some(0.6),
        }
    }

    #[test]
    fn test_provider_name_from_url() {
        let groq = ChatCompletionsProvider::new(SecretString::from("k"), &ModelConfig::default()).unwrap();
        assert_eq!(groq.name(), "groq");

        let other = ChatCompletionsProvider::new(
            SecretString::from("k"),
            &ModelConfig {
                api_url: "http://localhost:8080/v1/chat/completions".to_string(),
                ..ModelConfig::default()
            },
        )
        .unwrap();
        assert_eq!(other.name(), "openai-compatible");
    }

    #[test]
    fn test_wire_request_uses_default_model() {
        let provider = ChatCompletionsProvider::new(SecretString::from("k"), &ModelConfig::default()).unwrap();
        let body = provider.to_wire_request(&request());
        assert_eq!(body.model, "llama-3.1-8b-instant");
        assert_eq!(body.messages[0].role, "system");
        assert_eq!(body.messages[1].role, "user");
        assert_eq!(body.messages[1].content, "What is Rust?");
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama-3.1-8b-instant",
                "max_tokens": 500,
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "What is Rust?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "chatcmpl-1",
                "model": "llama-3.1-8b-instant",
                "choices": [{"index": 0, "message": {"role": "assistant", "content": "A systems language."}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = provider_for(&server, 10).complete(&request()).await.unwrap();
        assert_eq!(response.content, "A systems language.");
        assert_eq!(response.model.as_deref(), Some("llama-3.1-8b-instant"));
    }

    #[tokio::test]
    async fn test_complete_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "error": {"message": "The model `x` does not exist", "type": "invalid_request_error"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert_eq!(err, LlmError::Service("The model `x` does not exist".to_string()));
    }

    #[tokio::test]
    async fn test_complete_missing_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "chatcmpl-2"})))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_non_json_body_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert!(
            matches!(err, LlmError::Transport(ref msg) if msg.starts_with("invalid JSON in response body")),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn test_complete_json_of_wrong_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::UnexpectedResponse(_)));
    }

    #[tokio::test]
    async fn test_complete_string_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "rate limited"})))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert_eq!(err, LlmError::Service("rate limited".to_string()));
    }

    #[tokio::test]
    async fn test_complete_http_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Invalid API Key"}
            })))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert_eq!(
            err,
            LlmError::Status {
                status: 401,
                detail: "Invalid API Key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_complete_http_status_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = provider_for(&server, 10).complete(&request()).await.unwrap_err();
        assert_eq!(
            err,
            LlmError::Status {
                status: 503,
                detail: "Service Unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_complete_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(3))
                    .set_body_json(json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = provider_for(&server, 1).complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }

    #[tokio::test]
    async fn test_complete_connection_refused() {
        let config = ModelConfig {
            api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            timeout_secs: 2,
            ..ModelConfig::default()
        };
        let provider = ChatCompletionsProvider::new(SecretString::from("k"), &config).unwrap();

        let err = provider.complete(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Transport(_)));
    }
}
