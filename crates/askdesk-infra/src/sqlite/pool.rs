//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. `DatabasePool` holds a
//! multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes. Every repository call checks a
//! connection out for one statement (or one transaction) and hands it back
//! when the query future completes, on success and on error alike.

use std::path::Path;
use std::str::FromStr;

use askdesk_types::error::RepositoryError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERTs.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Runs migrations (create-if-not-exists only) on the writer pool before
    /// the reader pool is opened.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }

    /// Open (creating if needed) the database file at `path`.
    ///
    /// Missing parent directories are created first.
    pub async fn open(path: &Path) -> Result<Self, sqlx::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        Self::new(&database_url(path)).await
    }

    /// Check that the database answers a trivial query.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(&self.reader)
            .await
            .map_err(|e| RepositoryError::Connection(e.to_string()))?;
        Ok(())
    }

    /// Close both pools, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.reader.close().await;
        self.writer.close().await;
    }
}

/// SQLite URL for a database file, opened read-write and created if missing.
pub fn database_url(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> (DatabasePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let pool = DatabasePool::open(&dir.path().join("test.db")).await.unwrap();
    (pool, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_pool_creates_tables() {
        let (pool, _dir) = test_pool().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(&pool.reader)
        .await
        .unwrap();

        let table_names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert_eq!(table_names, vec!["conversations", "knowledge_base"]);
    }

    #[tokio::test]
    async fn test_pool_wal_mode() {
        let (pool, _dir) = test_pool().await;

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(result.0.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("instance").join("askdesk.db");

        let pool = DatabasePool::open(&path).await.unwrap();
        pool.ping().await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_reopen_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("askdesk.db");

        let first = DatabasePool::open(&path).await.unwrap();
        first.close().await;
        let second = DatabasePool::open(&path).await.unwrap();
        second.ping().await.unwrap();
    }

    #[tokio::test]
    async fn test_ping_fails_after_close() {
        let (pool, _dir) = test_pool().await;
        pool.close().await;
        assert!(pool.ping().await.is_err());
    }

    #[test]
    fn test_database_url() {
        let url = database_url(Path::new("/tmp/askdesk.db"));
        assert_eq!(url, "sqlite:///tmp/askdesk.db?mode=rwc");
    }
}
