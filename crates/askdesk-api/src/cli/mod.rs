//! CLI command definitions for the `askdesk` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod history;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Answer questions from a small knowledge base, with an AI fallback.
#[derive(Parser)]
#[command(name = "askdesk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors. Command output is still printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of `{data_dir}/config.toml`.
    #[arg(long, global = true, env = "ASKDESK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export trace spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on (overrides config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config).
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask a single question and print the answer.
    Ask {
        /// The question to ask.
        message: String,
    },

    /// Show recent exchanges, newest first.
    History {
        /// Maximum number of exchanges to show (at most 50).
        #[arg(short, long, default_value = "20")]
        limit: u32,
    },

    /// Storage, knowledge base, and model credential status.
    Status,
}
