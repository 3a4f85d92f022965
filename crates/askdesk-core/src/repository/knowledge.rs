//! Knowledge repository trait definition.

use askdesk_types::error::RepositoryError;
use askdesk_types::knowledge::{KnowledgeEntry, NewKnowledgeEntry};

/// Repository trait for the static question/answer table.
///
/// Implementations live in askdesk-infra (e.g., `SqliteKnowledgeRepository`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait KnowledgeRepository: Send + Sync {
    /// Find the best row containing `text` as a case-sensitive substring.
    ///
    /// Rows whose question contains `text` rank before rows where only the
    /// answer does; ties are broken by ascending row id. `Ok(None)` means no
    /// row matched, which is a normal outcome.
    fn search(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Option<KnowledgeEntry>, RepositoryError>> + Send;

    /// All rows ordered by id.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<KnowledgeEntry>, RepositoryError>> + Send;

    /// Number of rows in the table.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Insert `entries` only if the table is empty. Returns the number of rows inserted.
    ///
    /// The emptiness check and the inserts must happen atomically.
    fn seed_if_empty(
        &self,
        entries: &[NewKnowledgeEntry],
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
