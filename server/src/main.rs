mod collections;
mod config;
mod persistence;
mod service;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use collections::{CustomerStore, OrderStore};
use persistence::sqlite::{Database, SqliteArticleRepository};
use persistence::{ArticleRepository, InMemoryArticleRepository};
use service::{build_router, AppState};

/// HTTP server for articles, customers and orders.
#[derive(Parser)]
#[command(name = "articles-server", version)]
struct Cli {
    /// Address to listen on (overrides ARTICLES_BIND_ADDR).
    #[arg(long)]
    addr: Option<SocketAddr>,

    /// SQLite database file (overrides ARTICLES_DATABASE_PATH).
    #[arg(long)]
    database: Option<PathBuf>,

    /// Keep articles in process memory instead of SQLite.
    #[arg(long, conflicts_with = "database")]
    in_memory: bool,

    /// Write daily-rolling log files to this directory (overrides ARTICLES_LOG_DIR).
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Initialize tracing. Returns the appender guard, which must outlive `main`
/// for buffered file logs to be flushed.
fn init_tracing(log_dir: Option<PathBuf>) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter());

    match log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "articles-server");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(filter());
            tracing_subscriber::registry()
                .with(stdout_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(stdout_layer).init();
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

/// Seed the article store, then serve until shutdown.
async fn serve<R: ArticleRepository + 'static>(
    articles: Arc<R>,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    // Seed before the listener exists so no request sees an empty store.
    persistence::seed_default_article(articles.as_ref())
        .await
        .context("failed to seed default article")?;

    let state = AppState::new(
        articles,
        CustomerStore::new(),
        OrderStore::with_sample_orders(),
    );

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(cli.log_dir.or_else(config::get_log_dir));

    tracing::info!("Starting articles server");
    let addr = cli.addr.unwrap_or_else(config::get_bind_addr);

    if cli.in_memory {
        tracing::info!("Using in-memory article store");
        return serve(Arc::new(InMemoryArticleRepository::new()), addr).await;
    }

    let db_path = cli.database.unwrap_or_else(config::get_database_path);
    let pool_config = config::get_pool_config();
    tracing::info!("Using database: {}", db_path.display());

    let db = Database::open(&db_path, &pool_config)
        .await
        .with_context(|| format!("failed to open database at {}", db_path.display()))?;

    serve(Arc::new(SqliteArticleRepository::new(db)), addr).await
}
