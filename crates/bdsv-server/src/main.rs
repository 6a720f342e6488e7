use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use bdsv_core::catalog::Catalog;
use bdsv_core::config::ServerConfig;
use bdsv_core::logging;
use bdsv_server::http;

/// HTTP lookup service for Bedrock dedicated-server download URLs.
#[derive(Debug, Parser)]
#[command(name = "bdsv")]
#[command(about = "bdsv: Bedrock dedicated-server download URL lookup", long_about = None)]
struct Cli {
    /// Port to listen on (overrides $PORT; default 8080).
    #[arg(long, value_name = "PORT")]
    port: Option<u16>,

    /// Path to the version catalog JSON (overrides $BDSV_CATALOG).
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; fall back to stderr so a
    // read-only state dir never prevents startup.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = run().await {
        eprintln!("bdsv error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = ServerConfig::from_env()?;
    if let Some(port) = cli.port {
        cfg.port = port;
    }
    if let Some(path) = cli.catalog {
        cfg.catalog_path = path;
    }

    let catalog = Catalog::load(&cfg.catalog_path)?;
    tracing::info!(
        linux = catalog.linux.len(),
        win = catalog.win.len(),
        "catalog loaded from {}",
        cfg.catalog_path.display()
    );

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port))
        .await
        .with_context(|| format!("bind 0.0.0.0:{}", cfg.port))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, http::router(catalog))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve")?;

    tracing::info!("shut down cleanly");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; serve until killed.
        std::future::pending::<()>().await;
    }
}
