//! Infrastructure layer for AskDesk.
//!
//! Contains implementations of the traits defined in `askdesk-core`:
//! SQLite storage for the knowledge table and conversation log, the
//! chat-completions HTTP client, and the configuration loader.

pub mod config;
pub mod llm;
pub mod sqlite;
