//! PresenX web server.
//!
//! Serves the built single-page application. Every path that is not a file
//! in the dist directory gets `index.html`, so client-side routes such as
//! `/login` survive a page reload.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// presenx-server: static host for the PresenX frontend
#[derive(Parser, Debug)]
#[command(name = "presenx-server")]
#[command(version, about, long_about = None)]
struct Config {
    /// Address to listen on
    #[arg(long, env = "PRESENX_ADDR", default_value = "0.0.0.0:5970")]
    addr: SocketAddr,

    /// Directory holding the Trunk build output
    #[arg(long, env = "PRESENX_DIST", default_value = "crates/frontend/dist")]
    dist: PathBuf,
}

/// Router serving `dist`, falling back to its `index.html`.
fn build_router(dist: &Path) -> Router {
    let index = ServeFile::new(dist.join("index.html"));
    let assets = ServeDir::new(dist)
        .append_index_html_on_directories(true)
        .fallback(index);

    Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::parse();

    if !config.dist.join("index.html").is_file() {
        tracing::warn!(
            "no index.html in {}, run `trunk build` in crates/frontend first",
            config.dist.display()
        );
    }

    let app = build_router(&config.dist);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("Serving {} on http://{}", config.dist.display(), config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
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
