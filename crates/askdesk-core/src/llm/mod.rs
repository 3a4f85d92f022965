//! LLM provider abstractions for AskDesk.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `ModelProxy`: wraps an optional provider and turns every failure into reply text

pub mod provider;
pub mod proxy;
