//! Shared domain types for AskDesk.
//!
//! Knowledge entries, conversation records, chat replies, LLM request shapes,
//! configuration, and the error enums shared by every layer.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod conversation;
pub mod error;
pub mod knowledge;
pub mod llm;
