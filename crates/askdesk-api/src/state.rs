//! Application state wiring storage, the model proxy, and the chat service.
//!
//! The service is generic over repository/provider traits; AppState pins it
//! to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use askdesk_core::chat::service::ChatService;
use askdesk_core::llm::proxy::ModelProxy;
use askdesk_core::seed::default_knowledge;
use askdesk_infra::config::{database_path, resolve_api_key};
use askdesk_infra::llm::chat_completions::ChatCompletionsProvider;
use askdesk_infra::llm::create_provider;
use askdesk_infra::sqlite::conversation::SqliteConversationRepository;
use askdesk_infra::sqlite::knowledge::SqliteKnowledgeRepository;
use askdesk_infra::sqlite::pool::DatabasePool;
use askdesk_types::config::AppConfig;

/// Chat service pinned to SQLite storage and the chat-completions client.
pub type ConcreteChatService =
    ChatService<SqliteKnowledgeRepository, SqliteConversationRepository, ChatCompletionsProvider>;

/// Shared application state, used by both CLI commands and HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub db_pool: DatabasePool,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Open the database, resolve the credential, and wire the chat service.
    pub async fn init(config: AppConfig, data_dir: PathBuf) -> anyhow::Result<Self> {
        let db_path = database_path(&config, &data_dir);
        let db_pool = DatabasePool::open(&db_path).await?;
        tracing::debug!(path = %db_path.display(), "Database opened");

        let api_key = resolve_api_key(&config.model);
        Self::with_pool(db_pool, config, data_dir, api_key).await
    }

    /// Wire services on an already-open pool and seed the knowledge table.
    pub async fn with_pool(
        db_pool: DatabasePool,
        config: AppConfig,
        data_dir: PathBuf,
        api_key: Option<SecretString>,
    ) -> anyhow::Result<Self> {
        let provider = create_provider(&config.model, api_key)?;
        if provider.is_none() {
            tracing::info!(
                env = %config.model.api_key_env,
                "No model credential found, AI fallback disabled"
            );
        }

        let chat_service = ChatService::new(
            SqliteKnowledgeRepository::new(db_pool.clone()),
            SqliteConversationRepository::new(db_pool.clone()),
            ModelProxy::new(provider, &config.model),
        );
        chat_service.seed_knowledge(&default_knowledge()).await?;

        Ok(Self {
            chat_service: Arc::new(chat_service),
            db_pool,
            config: Arc::new(config),
            data_dir,
        })
    }

    /// Whether a model credential was configured at startup.
    pub fn model_configured(&self) -> bool {
        self.chat_service.proxy().is_configured()
    }
}
