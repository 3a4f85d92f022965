//! `askdesk history` - recent exchanges as a table.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use crate::state::AppState;

const PREVIEW_CHARS: usize = 60;

/// Print up to `limit` exchanges, newest first.
pub async fn history(state: &AppState, limit: u32, json: bool) -> Result<()> {
    let records = state.chat_service.history(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!();
        println!(
            "  {} No conversations yet. Try: {}",
            style("i").blue().bold(),
            style("askdesk ask \"What is Flask?\"").yellow()
        );
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("When").fg(Color::White),
        Cell::new("Question").fg(Color::White),
        Cell::new("Answer").fg(Color::White),
    ]);

    for record in &records {
        table.add_row(vec![
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()).fg(Color::DarkGrey),
            Cell::new(preview(&record.user_message)).fg(Color::Cyan),
            Cell::new(preview(&record.bot_response)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} exchange{}",
        style(records.len()).bold(),
        if records.len() == 1 { "" } else { "s" }
    );
    println!();

    Ok(())
}

/// First line of `text`, cut to [`PREVIEW_CHARS`] characters.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() > PREVIEW_CHARS {
        let cut: String = line.chars().take(PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else if line.len() < text.trim_end().len() {
        format!("{line} ...")
    } else {
        line.to_string()
    }
}
