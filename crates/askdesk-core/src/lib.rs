//! Business logic and repository trait definitions for AskDesk.
//!
//! This crate defines the "ports" (repository and provider traits) that the
//! infrastructure layer implements, plus the chat flow built on top of them.
//! It depends only on `askdesk-types` -- never on `askdesk-infra` or any
//! database/IO crate.

pub mod chat;
pub mod llm;
pub mod repository;
pub mod seed;
