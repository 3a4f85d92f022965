//! HTTP layer for AskDesk.
//!
//! Axum router serving the chat page and the JSON API under `/api`.

pub mod error;
pub mod handlers;
pub mod router;
