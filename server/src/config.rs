//! Configuration for the articles server.
//!
//! Every value has a compile-time default and can be overridden via a
//! dedicated environment variable. Command-line flags in `main.rs` take
//! precedence over both.
//!
//! Data directory precedence:
//! 1. ARTICLES_DATA_DIR environment variable
//! 2. the platform data directory (e.g. ~/.local/share/articles)
//! 3. ./data (fallback for development)

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::persistence::sqlite::PoolConfig;

const DEV_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "articles.db";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Get the data directory for persistence.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ARTICLES_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(dirs) = directories::ProjectDirs::from("com", "example", "articles") {
        return dirs.data_dir().to_path_buf();
    }

    PathBuf::from(DEV_DATA_DIR)
}

/// Get the SQLite database path.
///
/// Priority:
/// 1. ARTICLES_DATABASE_PATH env variable if set
/// 2. `articles.db` inside [`get_data_dir`]
pub fn get_database_path() -> PathBuf {
    if let Ok(path) = std::env::var("ARTICLES_DATABASE_PATH") {
        return PathBuf::from(path);
    }

    get_data_dir().join(DATABASE_FILE)
}

/// Get the HTTP listen address. Unparsable values fall back to the default.
pub fn get_bind_addr() -> SocketAddr {
    std::env::var("ARTICLES_BIND_ADDR")
        .ok()
        .and_then(|addr| addr.parse().ok())
        .unwrap_or_else(default_bind_addr)
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT))
}

/// Get the connection pool settings.
///
/// `ARTICLES_DB_MAX_CONNECTIONS` and `ARTICLES_DB_BUSY_TIMEOUT_MS` override the
/// defaults (5 connections, 5000 ms); values that do not parse are ignored.
pub fn get_pool_config() -> PoolConfig {
    let max_connections = std::env::var("ARTICLES_DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&n: &u32| n > 0)
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    let busy_timeout_ms = std::env::var("ARTICLES_DB_BUSY_TIMEOUT_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_BUSY_TIMEOUT_MS);

    PoolConfig {
        max_connections,
        busy_timeout: Duration::from_millis(busy_timeout_ms),
    }
}

/// Directory for rolling log files, if file logging is enabled.
pub fn get_log_dir() -> Option<PathBuf> {
    std::env::var("ARTICLES_LOG_DIR").ok().map(PathBuf::from)
}
