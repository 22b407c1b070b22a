//! Tiendita REST API entry point.
//!
//! Binary name: `tiendita`
//!
//! Parses CLI arguments, loads the config file (flags override file
//! values), wires the application state, and serves the API with graceful
//! shutdown. A background task purges expired sessions on an interval.

mod http;
mod state;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use tiendita_infra::config::load_config;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "tiendita", about = "Store-assistant chat service", version)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Bind address (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the store catalog JSON (overrides config).
    #[arg(long)]
    catalog: Option<String>,

    /// Model identifier for the generation API (overrides config).
    #[arg(long)]
    model: Option<String>,

    /// API key for the generation API.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,tiendita=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let mut config = load_config(&cli.config).await;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = catalog;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }

    let state = AppState::new(&config, SecretString::from(cli.api_key));

    // Background sweeper enforcing the session TTL.
    let sweeper_store = state.session_store.clone();
    let sweep_interval = Duration::from_secs(config.sweep_interval_secs);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            sweeper_store.purge_expired();
        }
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, model = %config.model, "Tiendita API listening");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
