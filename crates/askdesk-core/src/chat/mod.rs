//! The chat flow: knowledge lookup, model fallback, best-effort logging.

pub mod service;
