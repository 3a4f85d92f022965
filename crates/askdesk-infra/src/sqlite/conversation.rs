//! SQLite conversation log implementation.
//!
//! Append and read only. Follows the same patterns as the knowledge
//! repository: raw queries, a private Row struct, split reader/writer pools.

use askdesk_core::repository::conversation::ConversationRepository;
use askdesk_types::conversation::{ConversationRecord, NewConversation};
use askdesk_types::error::RepositoryError;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `ConversationRepository`.
pub struct SqliteConversationRepository {
    pool: DatabasePool,
}

impl SqliteConversationRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct ConversationRow {
    id: i64,
    user_message: String,
    bot_response: String,
    timestamp: String,
}

impl ConversationRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_message: row.try_get("user_message")?,
            bot_response: row.try_get("bot_response")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_record(self) -> Result<ConversationRecord, RepositoryError> {
        Ok(ConversationRecord {
            id: self.id,
            user_message: self.user_message,
            bot_response: self.bot_response,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

impl ConversationRepository for SqliteConversationRepository {
    async fn append(
        &self,
        conversation: &NewConversation,
    ) -> Result<ConversationRecord, RepositoryError> {
        let result = sqlx::query(
            "INSERT INTO conversations (user_message, bot_response, timestamp) VALUES (?, ?, ?)",
        )
        .bind(&conversation.user_message)
        .bind(&conversation.bot_response)
        .bind(format_datetime(&conversation.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(ConversationRecord {
            id: result.last_insert_rowid(),
            user_message: conversation.user_message.clone(),
            bot_response: conversation.bot_response.clone(),
            timestamp: conversation.timestamp,
        })
    }

    async fn recent(&self, limit: u32) -> Result<Vec<ConversationRecord>, RepositoryError> {
        let rows = sqlx::query(
            r#"SELECT id, user_message, bot_response, timestamp FROM conversations
               ORDER BY timestamp DESC, id DESC
               LIMIT ?"#,
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let conversation_row =
                ConversationRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            records.push(conversation_row.into_record()?);
        }

        Ok(records)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM conversations")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_pool;
    use chrono::{Duration, TimeZone, Utc};

    fn conversation(user: &str, bot: &str, offset_secs: i64) -> NewConversation {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        NewConversation {
            user_message: user.to_string(),
            bot_response: bot.to_string(),
            timestamp: base + Duration::seconds(offset_secs),
        }
    }

    #[tokio::test]
    async fn test_append_returns_stored_record() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        let first = repo.append(&conversation("hi", "hello", 0)).await.unwrap();
        let second = repo.append(&conversation("bye", "goodbye", 1)).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.user_message, "hi");
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_recent_newest_first() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        repo.append(&conversation("second", "b", 10)).await.unwrap();
        repo.append(&conversation("first", "a", 0)).await.unwrap();
        repo.append(&conversation("third", "c", 20)).await.unwrap();

        let records = repo.recent(50).await.unwrap();
        let messages: Vec<&str> = records.iter().map(|r| r.user_message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
        assert_eq!(records[0].bot_response, "c");
        assert_eq!(records[0].timestamp, conversation("", "", 20).timestamp);
    }

    #[tokio::test]
    async fn test_recent_same_timestamp_orders_by_id() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        repo.append(&conversation("older", "a", 5)).await.unwrap();
        repo.append(&conversation("newer", "b", 5)).await.unwrap();

        let records = repo.recent(50).await.unwrap();
        assert_eq!(records[0].user_message, "newer");
        assert_eq!(records[1].user_message, "older");
    }

    #[tokio::test]
    async fn test_recent_respects_limit() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteConversationRepository::new(pool);

        for i in 0..60 {
            repo.append(&conversation(&format!("q{i}"), "a", i)).await.unwrap();
        }

        let records = repo.recent(50).await.unwrap();
        assert_eq!(records.len(), 50);
        assert_eq!(records[0].user_message, "q59");
        assert_eq!(records[49].user_message, "q10");
    }

    #[tokio::test]
    async fn test_append_fails_on_closed_pool() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteConversationRepository::new(pool.clone());
        pool.close().await;

        let result = repo.append(&conversation("hi", "hello", 0)).await;
        assert!(matches!(result, Err(RepositoryError::Query(_))));
    }
}
