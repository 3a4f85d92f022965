//! `askdesk ask` - run one exchange from the command line.

use anyhow::Result;
use console::style;

use askdesk_types::chat::ReplySource;

use crate::state::AppState;

/// Answer `message` through the chat service and print the reply.
///
/// The exchange is logged exactly as an HTTP chat request would be.
pub async fn ask(state: &AppState, message: &str, json: bool) -> Result<()> {
    let reply = state.chat_service.handle_message(message).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    let source = match reply.source {
        ReplySource::Knowledge => style("knowledge base").green(),
        ReplySource::Model => style("AI model").magenta(),
    };

    println!();
    println!("  {}", reply.response.replace('\n', "\n  "));
    println!();
    println!("  {} {}", style("from").dim(), source);
    println!();

    Ok(())
}
