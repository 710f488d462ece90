use crate::config::{initialize_app_state, Settings};
use crate::router::create_router;
use crate::schemas::AppState;
use crate::snapshots::GRAPH_DIR;
use axum::Router;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Writes `value` as the snapshot file `name` inside `dir`.
pub fn write_snapshot(dir: &Path, name: &str, value: &Value) {
    let raw = serde_json::to_string_pretty(value).expect("Failed to encode snapshot");
    std::fs::write(dir.join(name), raw).expect("Failed to write snapshot");
}

/// AppState over `data_dir` with caching disabled so each request re-reads the files.
pub fn setup_test_app_state(data_dir: &Path) -> AppState {
    let settings = Settings {
        data_dir: data_dir.to_path_buf(),
        graph_dir: data_dir.join(GRAPH_DIR),
        cache_ttl_secs: 0,
        ..Settings::default()
    };
    initialize_app_state(&settings)
}

/// Create axum app over a fresh, empty data directory.
///
/// The directory is returned so tests can drop snapshot files into it; it is
/// removed when the `TempDir` is dropped.
pub fn setup_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("Failed to create data directory");
    let router = create_router(setup_test_app_state(dir.path()));
    (router, dir)
}
