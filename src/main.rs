//! Search Proxy
//!
//! A small HTTP service in front of a third-party image-search provider,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │                SEARCH PROXY                │
//!     Client Request     │                                           │
//!     ───────────────────┼─▶ http/server ──▶ http/search             │
//!                        │                       │                   │
//!                        │                       ▼                   │
//!                        │                 upstream/client ──────────┼──▶ Search
//!                        │                       │                   │    Provider
//!     Client Response    │                       ▼                   │
//!     ◀──────────────────┼── http/response (shape result or error)   │
//!                        │                                           │
//!                        │  ┌─────────────────────────────────────┐  │
//!                        │  │        Cross-Cutting Concerns        │  │
//!                        │  │  ┌────────┐ ┌───────────┐ ┌───────┐ │  │
//!                        │  │  │ config │ │observabil-│ │life-  │ │  │
//!                        │  │  │        │ │ity        │ │cycle  │ │  │
//!                        │  │  └────────┘ └───────────┘ └───────┘ │  │
//!                        │  └─────────────────────────────────────┘  │
//!                        └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use search_proxy::config::{loader, validate_config, ProxyConfig};
use search_proxy::http::HttpServer;
use search_proxy::lifecycle::{signals, Shutdown};
use search_proxy::observability;

#[derive(Parser)]
#[command(name = "search-proxy")]
#[command(about = "HTTP proxy in front of a third-party search provider", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding config file and environment
    #[arg(long)]
    listen: Option<String>,

    /// Upstream URL template containing {query}, overriding config file
    /// and environment
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config is merged before the subscriber exists; load failures
    // surface on stderr through the error return.
    let config = load_config(&cli)?;

    // Initialize tracing subscriber
    let default_filter = format!(
        "search_proxy={level},tower_http={level}",
        level = config.observability.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("search-proxy v0.1.0 starting");

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.url_template,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics server
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Translate SIGINT/SIGTERM into the coordinated shutdown signal
    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(&config);
    server.run(listener, shutdown_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Merge configuration layers: defaults, file, environment, CLI flags.
fn load_config(cli: &Cli) -> Result<ProxyConfig, loader::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => loader::from_file(path)?,
        None => ProxyConfig::default(),
    };

    loader::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    if let Some(listen) = &cli.listen {
        config.listener.bind_address = listen.clone();
    }
    if let Some(upstream) = &cli.upstream {
        config.upstream.url_template = upstream.clone();
    }

    validate_config(&config).map_err(loader::ConfigError::Validation)?;
    Ok(config)
}
