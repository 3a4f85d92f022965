//! POST /api/chat - answer one user message.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body. `message` is optional here so a missing field is reported
/// with the same error as a missing or malformed body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

const MESSAGE_REQUIRED: &str = "Message is required";

/// POST /api/chat - Look the message up, fall back to the model, log the exchange.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = uuid::Uuid::now_v7();

    let message = match body {
        Ok(Json(ChatRequest { message: Some(message) })) => message,
        Ok(_) => return Err(AppError::Validation(MESSAGE_REQUIRED.to_string())),
        Err(rejection) => {
            tracing::debug!(%request_id, error = %rejection, "Rejected chat body");
            return Err(AppError::Validation(MESSAGE_REQUIRED.to_string()));
        }
    };

    let reply = state.chat_service.handle_message(&message).await.map_err(|e| {
        tracing::warn!(%request_id, error = %e, "Chat request failed");
        AppError::from(e)
    })?;

    tracing::info!(
        %request_id,
        source = %reply.source,
        chars = reply.response.len(),
        "Chat reply sent"
    );

    Ok(Json(ChatResponse {
        response: reply.response,
        timestamp: reply.timestamp,
    }))
}
