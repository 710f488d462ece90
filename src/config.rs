use config::{ConfigError, Environment, File};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;

use crate::schemas::AppState;
use crate::snapshots::SnapshotStore;

/// Runtime configuration, read from `ses-dashboard.toml` and `SES_*` variables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// Directory holding the analytics snapshot files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory of recorded call-graph snapshots served by `/api/graph/`
    #[serde(default = "default_graph_dir")]
    pub graph_dir: PathBuf,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// How long a served response stays cached, in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_chart_width")]
    pub chart_width: f64,
    #[serde(default = "default_chart_height")]
    pub chart_height: f64,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("behavior_data/architecture_health")
}

fn default_graph_dir() -> PathBuf {
    PathBuf::from("behavior_data/snapshots")
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_cache_ttl_secs() -> u64 {
    5
}

fn default_chart_width() -> f64 {
    800.0
}

fn default_chart_height() -> f64 {
    420.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            graph_dir: default_graph_dir(),
            bind_address: default_bind_address(),
            cache_ttl_secs: default_cache_ttl_secs(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        config::Config::builder()
            .add_source(File::with_name("ses-dashboard").required(false))
            .add_source(Environment::with_prefix("SES"))
            .build()?
            .try_deserialize()
    }

    pub fn chart_config(&self) -> chart::ChartConfig {
        chart::ChartConfig::with_size(self.chart_width, self.chart_height)
    }
}

/// Variable holding the tracing directives.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "ses_dashboard=debug,tower_http=debug,axum::rejection=trace";

/// Tracing filter read from `var`, falling back to the crate defaults.
///
/// Values from a `.env` file are only visible here once it has been loaded.
pub fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Builds the shared server state for `settings`.
pub fn initialize_app_state(settings: &Settings) -> AppState {
    tracing::info!("Serving snapshots from: {}", settings.data_dir.display());
    if !settings.data_dir.is_dir() {
        tracing::warn!(
            "Data directory {} does not exist yet; endpoints will serve empty snapshots",
            settings.data_dir.display()
        );
    }

    let cache = Cache::builder()
        .max_capacity(64)
        .time_to_live(Duration::from_secs(settings.cache_ttl_secs))
        .build();

    AppState {
        store: Arc::new(SnapshotStore::new(&settings.data_dir).with_graph_dir(&settings.graph_dir)),
        cache,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address, "0.0.0.0:8000");
        assert_eq!(settings.cache_ttl_secs, 5);
        assert_eq!(settings.graph_dir, PathBuf::from("behavior_data/snapshots"));
        assert_eq!(settings.chart_config().dimensions.width, 800.0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = config::Config::builder()
            .add_source(File::from_str("data_dir = \"/srv/ses\"\nchart_width = 1024", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/srv/ses"));
        assert_eq!(settings.chart_width, 1024.0);
        assert_eq!(settings.chart_height, 420.0);
        assert_eq!(settings.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_log_filter_reads_dotenv_values() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "SES_TEST_LOG_FILTER=ses_dashboard=trace\n").unwrap();

        dotenvy::from_path(&path).unwrap();

        assert!(log_filter("SES_TEST_LOG_FILTER").to_string().contains("ses_dashboard=trace"));
    }

    #[test]
    fn test_log_filter_defaults_when_unset() {
        let filter = log_filter("SES_TEST_LOG_FILTER_UNSET").to_string();
        assert!(filter.contains("ses_dashboard=debug"));
        assert!(filter.contains("tower_http=debug"));
    }
}
