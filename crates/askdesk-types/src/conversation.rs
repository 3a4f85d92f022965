//! Conversation log types.
//!
//! Every handled chat exchange produces exactly one [`ConversationRecord`].
//! Records are append-only: never updated, never deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of records returned by the history listing.
pub const HISTORY_LIMIT: u32 = 50;

/// A persisted exchange between a user and the bot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationRecord {
    pub id: i64,
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}

/// An exchange about to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewConversation {
    pub user_message: String,
    pub bot_response: String,
    pub timestamp: DateTime<Utc>,
}
