//! Blog Insights Service
//!
//! Wraps a single upstream blog-listing API with retrying fetches,
//! aggregate statistics, and title search.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                BLOG INSIGHTS                   │
//!   Client Request   │  ┌────────┐   ┌──────────┐   ┌─────────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│ handlers │──▶│ resilience  │  │
//!                    │  │ server │   │stats/srch│   │  retries    │  │
//!                    │  └────────┘   └────┬─────┘   └──────┬──────┘  │
//!                    │                    │                ▼         │
//!                    │               ┌────▼────┐    ┌─────────────┐  │     Upstream
//!   Client Response  │               │  blog   │◀───│  upstream   │◀─┼──── Blog API
//!   ◀────────────────┼───────────────│analysis │    │   client    │  │
//!                    │               └─────────┘    └─────────────┘  │
//!                    │   config · observability · lifecycle          │
//!                    └───────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use blog_insights::config::resolve_config;
use blog_insights::observability::{logging, metrics};
use blog_insights::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "blog-insights")]
#[command(about = "Blog statistics and search over an upstream blog API", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = resolve_config(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    logging::init_logging(&config.observability)?;

    tracing::info!("blog-insights v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        port = config.listener.port,
        upstream = %config.upstream.url,
        max_attempts = config.retries.max_attempts,
        "Configuration loaded"
    );
    if config.upstream.admin_secret.is_empty() {
        tracing::warn!("No upstream admin secret configured; set BLOG_ADMIN_SECRET");
    }

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::error!(error = %e, "Failed to start metrics exporter");
                }
            }
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(config.listener.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
