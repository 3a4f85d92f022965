//! Knowledge base types.
//!
//! A knowledge entry is a static question/answer pair seeded at startup and
//! searched by case-sensitive substring containment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single row of the knowledge table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// A question/answer pair to insert when seeding an empty knowledge table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewKnowledgeEntry {
    pub question: String,
    pub answer: String,
}

impl NewKnowledgeEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
