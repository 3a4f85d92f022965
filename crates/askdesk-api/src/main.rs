//! AskDesk CLI and HTTP server entry point.
//!
//! Binary name: `askdesk`
//!
//! Parses CLI arguments, loads configuration, initializes storage and the
//! chat service, then dispatches to a command or starts the HTTP server.

mod cli;
mod http;
mod state;

use anyhow::Context;
use clap::Parser;

use askdesk_infra::config::{load_config, load_config_strict, resolve_data_dir};
use askdesk_observe::{TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_options = TracingOptions {
        json: cli.log_json,
        otel: cli.otel,
        ..TracingOptions::from_verbosity(cli.verbose, cli.quiet)
    };
    init_tracing(&tracing_options)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let mut config = match &cli.config {
        Some(path) => load_config_strict(path)
            .await
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => load_config(&data_dir).await,
    };

    if let Commands::Serve { port, host } = &cli.command {
        if let Some(port) = port {
            config.server.port = *port;
        }
        if let Some(host) = host {
            config.server.host = host.clone();
        }
    }

    let state = AppState::init(config, data_dir).await?;

    match cli.command {
        Commands::Serve { .. } => serve(state).await?,
        Commands::Ask { message } => cli::ask::ask(&state, &message, cli.json).await?,
        Commands::History { limit } => cli::history::history(&state, limit, cli.json).await?,
        Commands::Status => cli::status::status(&state, cli.json).await?,
    }

    Ok(())
}

async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    println!(
        "  {} AskDesk listening on {}",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan()
    );
    if !state.model_configured() {
        println!(
            "  {}",
            console::style(format!(
                "AI fallback disabled (set {} to enable)",
                state.config.model.api_key_env
            ))
            .yellow()
        );
    }
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let pool = state.db_pool.clone();
    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
