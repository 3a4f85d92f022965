//! Conversation log repository trait definition.

use askdesk_types::conversation::{ConversationRecord, NewConversation};
use askdesk_types::error::RepositoryError;

/// Repository trait for the append-only conversation log.
///
/// There is deliberately no update or delete: records are written once.
pub trait ConversationRepository: Send + Sync {
    /// Append one exchange and return the stored record.
    fn append(
        &self,
        conversation: &NewConversation,
    ) -> impl std::future::Future<Output = Result<ConversationRecord, RepositoryError>> + Send;

    /// The most recent `limit` records, newest first (timestamp DESC, id DESC).
    fn recent(
        &self,
        limit: u32,
    ) -> impl std::future::Future<Output = Result<Vec<ConversationRecord>, RepositoryError>> + Send;

    /// Total number of logged exchanges.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;
}
