//! Chat exchange types.
//!
//! A [`ChatReply`] is what the chat flow hands back to its caller, whether the
//! answer came from the knowledge table or the model proxy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a reply's text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    /// Matched a row of the knowledge table.
    Knowledge,
    /// Produced by the model proxy (including its soft-failure strings).
    Model,
}

impl fmt::Display for ReplySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplySource::Knowledge => write!(f, "knowledge"),
            ReplySource::Model => write!(f, "model"),
        }
    }
}

/// The outcome of one chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub timestamp: DateTime<Utc>,
    pub source: ReplySource,
}
