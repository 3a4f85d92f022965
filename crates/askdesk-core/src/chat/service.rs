//! Chat service orchestrating lookup, model fallback, and the conversation log.
//!
//! Per message: trim and validate, search the knowledge table, fall back to the
//! model proxy on a miss, append the exchange to the log (best effort), reply.

use askdesk_types::chat::{ChatReply, ReplySource};
use askdesk_types::conversation::{ConversationRecord, HISTORY_LIMIT, NewConversation};
use askdesk_types::error::{ChatError, RepositoryError};
use askdesk_types::knowledge::NewKnowledgeEntry;
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, warn};

use crate::llm::provider::LlmProvider;
use crate::llm::proxy::ModelProxy;
use crate::repository::conversation::ConversationRepository;
use crate::repository::knowledge::KnowledgeRepository;

/// Orchestrates a single chat exchange.
///
/// Generic over the repositories and the provider so askdesk-core never
/// depends on askdesk-infra.
pub struct ChatService<K: KnowledgeRepository, C: ConversationRepository, P: LlmProvider> {
    knowledge_repo: K,
    conversation_repo: C,
    proxy: ModelProxy<P>,
}

impl<K, C, P> ChatService<K, C, P>
where
    K: KnowledgeRepository,
    C: ConversationRepository,
    P: LlmProvider,
{
    pub fn new(knowledge_repo: K, conversation_repo: C, proxy: ModelProxy<P>) -> Self {
        Self {
            knowledge_repo,
            conversation_repo,
            proxy,
        }
    }

    pub fn knowledge_repo(&self) -> &K {
        &self.knowledge_repo
    }

    pub fn conversation_repo(&self) -> &C {
        &self.conversation_repo
    }

    pub fn proxy(&self) -> &ModelProxy<P> {
        &self.proxy
    }

    /// Seed the knowledge table if it is empty. Returns rows inserted.
    pub async fn seed_knowledge(&self, entries: &[NewKnowledgeEntry]) -> Result<u64, RepositoryError> {
        let inserted = self.knowledge_repo.seed_if_empty(entries).await?;
        if inserted > 0 {
            info!(rows = inserted, "Seeded knowledge base");
        } else {
            debug!("Knowledge base already populated, skipping seed");
        }
        Ok(inserted)
    }

    /// Answer text of the best knowledge row containing `text`.
    pub async fn lookup(&self, text: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self
            .knowledge_repo
            .search(text)
            .await?
            .map(|entry| entry.answer))
    }

    /// Handle one user message end to end.
    ///
    /// Fails only for an empty message (before any lookup, model call, or
    /// log write) or a knowledge read failure.
    pub async fn handle_message(&self, raw_message: &str) -> Result<ChatReply, ChatError> {
        let message = raw_message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let (response, source) = match self.lookup(message).await? {
            Some(answer) => (answer, ReplySource::Knowledge),
            None => (self.proxy.complete(message).await, ReplySource::Model),
        };

        // Storage keeps microseconds; truncating here keeps the reply and the
        // stored row identical.
        let timestamp = Utc::now().trunc_subsecs(6);
        self.record(message, &response, timestamp).await;

        info!(%source, "Chat message handled");

        Ok(ChatReply {
            response,
            timestamp,
            source,
        })
    }

    /// Append an exchange to the conversation log, best effort.
    ///
    /// A storage failure is logged and discarded; the caller's reply is
    /// never affected.
    pub async fn record(&self, user_message: &str, bot_response: &str, timestamp: DateTime<Utc>) {
        let conversation = NewConversation {
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            timestamp,
        };

        if let Err(e) = self.conversation_repo.append(&conversation).await {
            warn!(error = %e, "Failed to record conversation, continuing");
        }
    }

    /// Most recent exchanges, newest first. `limit` is capped at [`HISTORY_LIMIT`].
    pub async fn history(&self, limit: u32) -> Result<Vec<ConversationRecord>, RepositoryError> {
        self.conversation_repo
            .recent(limit.min(HISTORY_LIMIT))
            .await
    }
}
