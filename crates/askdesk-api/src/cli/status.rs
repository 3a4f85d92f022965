//! System status dashboard command.

use anyhow::Result;
use console::style;
use serde::Serialize;

use askdesk_core::repository::conversation::ConversationRepository;
use askdesk_core::repository::knowledge::KnowledgeRepository;
use askdesk_infra::config::database_path;

use crate::state::AppState;

/// Everything the status command reports.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub version: &'static str,
    pub data_dir: String,
    pub database_path: String,
    pub database_error: Option<String>,
    /// Questions of the knowledge table in id order; `None` if unreadable.
    pub knowledge_questions: Option<Vec<String>>,
    pub conversations: Option<u64>,
    pub model: String,
    pub api_url: String,
    pub model_configured: bool,
}

/// Probe storage and collect counts. Read failures are reported, not returned.
pub async fn gather(state: &AppState) -> StatusReport {
    let database_error = state.db_pool.ping().await.err().map(|e| e.to_string());
    let knowledge_questions = state
        .chat_service
        .knowledge_repo()
        .list()
        .await
        .ok()
        .map(|entries| entries.into_iter().map(|e| e.question).collect());
    let conversations = state.chat_service.conversation_repo().count().await.ok();

    StatusReport {
        version: env!("CARGO_PKG_VERSION"),
        data_dir: state.data_dir.display().to_string(),
        database_path: database_path(&state.config, &state.data_dir)
            .display()
            .to_string(),
        database_error,
        knowledge_questions,
        conversations,
        model: state.config.model.model.clone(),
        api_url: state.config.model.api_url.clone(),
        model_configured: state.model_configured(),
    }
}

/// Display storage reachability, knowledge entries, and model credential presence.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let report = gather(state).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("  {} AskDesk v{}", style("⚡").bold(), report.version);
    println!();

    println!("  {}", style("── Storage ──").dim());
    match &report.database_error {
        None => println!("  Database: {}", style("connected").green()),
        Some(e) => println!("  Database: {} ({e})", style("unreachable").red()),
    }
    println!("  Path:     {}", style(&report.database_path).dim());
    match report.conversations {
        Some(n) => println!("  Conversations: {}", style(n).bold()),
        None => println!("  Conversations: {}", style("unavailable").red()),
    }
    println!();

    println!("  {}", style("── Knowledge base ──").dim());
    match &report.knowledge_questions {
        Some(questions) => {
            for question in questions {
                println!("  • {question}");
            }
            println!("  {} entries", style(questions.len()).bold());
        }
        None => println!("  {}", style("unavailable").red()),
    }
    println!();

    println!("  {}", style("── Model ──").dim());
    println!("  Model:    {}", style(&report.model).cyan());
    println!("  Endpoint: {}", style(&report.api_url).dim());
    if report.model_configured {
        println!("  API key:  {}", style("configured").green());
    } else {
        println!(
            "  API key:  {} (set {} to enable the AI fallback)",
            style("missing").yellow(),
            style(&state.config.model.api_key_env).yellow()
        );
    }
    println!();

    Ok(())
}
