//! OpenAI-compatible chat completions provider (Groq by default).
//!
//! A single non-streaming `POST` per request, bearer authentication, bounded
//! timeout, no retries.

pub mod client;
pub mod types;

pub use client::ChatCompletionsProvider;
