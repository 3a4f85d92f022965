//! SQLite knowledge repository implementation.
//!
//! Substring search uses `instr()`, which is case-sensitive and treats `%`
//! and `_` as ordinary characters, unlike `LIKE`.

use askdesk_core::repository::knowledge::KnowledgeRepository;
use askdesk_types::error::RepositoryError;
use askdesk_types::knowledge::{KnowledgeEntry, NewKnowledgeEntry};
use chrono::Utc;
use sqlx::Row;

use super::pool::DatabasePool;
use super::{format_datetime, parse_datetime};

/// SQLite-backed implementation of `KnowledgeRepository`.
pub struct SqliteKnowledgeRepository {
    pool: DatabasePool,
}

impl SqliteKnowledgeRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

struct KnowledgeRow {
    id: i64,
    question: String,
    answer: String,
    created_at: String,
}

impl KnowledgeRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            question: row.try_get("question")?,
            answer: row.try_get("answer")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_entry(self) -> Result<KnowledgeEntry, RepositoryError> {
        Ok(KnowledgeEntry {
            id: self.id,
            question: self.question,
            answer: self.answer,
            created_at: parse_datetime(&self.created_at)?,
        })
    }
}

impl KnowledgeRepository for SqliteKnowledgeRepository {
    async fn search(&self, text: &str) -> Result<Option<KnowledgeEntry>, RepositoryError> {
        let row = sqlx::query(
            r#"SELECT id, question, answer, created_at FROM knowledge_base
               WHERE instr(question, ?) > 0 OR instr(answer, ?) > 0
               ORDER BY CASE WHEN instr(question, ?) > 0 THEN 0 ELSE 1 END, id ASC
               LIMIT 1"#,
        )
        .bind(text)
        .bind(text)
        .bind(text)
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let knowledge_row = KnowledgeRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(knowledge_row.into_entry()?))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<KnowledgeEntry>, RepositoryError> {
        let rows = sqlx::query("SELECT id, question, answer, created_at FROM knowledge_base ORDER BY id ASC")
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in &rows {
            let knowledge_row =
                KnowledgeRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
            entries.push(knowledge_row.into_entry()?);
        }

        Ok(entries)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM knowledge_base")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        Ok(count as u64)
    }

    async fn seed_if_empty(&self, entries: &[NewKnowledgeEntry]) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;

        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM knowledge_base")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        // Dropping the transaction rolls it back.
        if existing > 0 {
            return Ok(0);
        }

        let created_at = format_datetime(&Utc::now());
        for entry in entries {
            sqlx::query("INSERT INTO knowledge_base (question, answer, created_at) VALUES (?, ?, ?)")
                .bind(&entry.question)
                .bind(&entry.answer)
                .bind(&created_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(entries.len() as u64)
    }
}
