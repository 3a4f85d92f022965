//! GET /api/history - most recent exchanges, newest first.

use axum::Json;
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::Serialize;

use askdesk_types::conversation::{ConversationRecord, HISTORY_LIMIT};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HistoryEntry {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ConversationRecord> for HistoryEntry {
    fn from(record: ConversationRecord) -> Self {
        Self {
            user_message: record.user_message,
            bot_response: record.bot_response,
            timestamp: record.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub conversations: Vec<HistoryEntry>,
}

/// GET /api/history - Up to 50 exchanges.
pub async fn history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let records = state
        .chat_service
        .history(HISTORY_LIMIT)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to get history: {e}")))?;

    Ok(Json(HistoryResponse {
        conversations: records.into_iter().map(HistoryEntry::from).collect(),
    }))
}
