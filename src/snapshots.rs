//! Read access to the snapshot files the analytics backend persists.
//!
//! Every file is optional. Missing files yield empty values so the dashboard
//! can render its empty states while the backend warms up.

use common::{
    ExecutiveResponse, ForecastResponse, GraphResponse, HealthResponse, HistoryEntry, ImpactResponse,
    DEFAULT_EXECUTIVE_SUMMARY,
};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

pub const HISTORY_FILE: &str = "health_history.json";
pub const FORECAST_FILE: &str = "forecast_output.json";
pub const HEALTH_FILE: &str = "health_output.json";
pub const RISK_FILE: &str = "risk_output.json";
/// Call-graph snapshot directory, relative to the data directory unless configured
pub const GRAPH_DIR: &str = "snapshots";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::Io { .. } => "SNAPSHOT_UNREADABLE",
            SnapshotError::Malformed { .. } => "SNAPSHOT_MALFORMED",
        }
    }
}

pub type Result<T, E = SnapshotError> = std::result::Result<T, E>;

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    data_dir: PathBuf,
    graph_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            graph_dir: data_dir.join(GRAPH_DIR),
            data_dir,
        }
    }

    pub fn with_graph_dir(mut self, graph_dir: impl Into<PathBuf>) -> Self {
        self.graph_dir = graph_dir.into();
        self
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Parsed contents of `name`, or `None` when the file is missing or blank.
    async fn read_json(&self, name: &str) -> Result<Option<Value>> {
        let path = self.data_dir.join(name);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("Snapshot {} not found", path.display());
                return Ok(None);
            }
            Err(source) => return Err(SnapshotError::Io { path, source }),
        };

        if raw.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SnapshotError::Malformed { path, source })
    }

    /// Recorded health history, oldest first.
    ///
    /// An unreadable history is treated as empty, matching how the backend
    /// itself recovers from a corrupt history file.
    #[instrument(skip(self))]
    pub async fn history(&self) -> Result<Vec<HistoryEntry>> {
        match self.read_json(HISTORY_FILE).await {
            Ok(Some(value)) => Ok(history_entries(value)),
            Ok(None) => Ok(Vec::new()),
            Err(e @ SnapshotError::Malformed { .. }) => {
                warn!("Ignoring health history: {}", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Persisted forecast object, verbatim; `{}` when none has been written.
    #[instrument(skip(self))]
    pub async fn forecast(&self) -> Result<Value> {
        Ok(self
            .read_json(FORECAST_FILE)
            .await?
            .unwrap_or_else(empty_object))
    }

    /// Persisted risk analysis; `{}` when none has been written.
    #[instrument(skip(self))]
    pub async fn risk(&self) -> Result<Value> {
        Ok(self.read_json(RISK_FILE).await?.unwrap_or_else(empty_object))
    }

    /// Latest health output stamped with `timestamp`.
    #[instrument(skip(self))]
    pub async fn health(&self, timestamp: &str) -> Result<HealthResponse> {
        let mut health = match self.read_json(HEALTH_FILE).await? {
            Some(value) => serde_json::from_value::<HealthResponse>(value).map_err(|source| {
                SnapshotError::Malformed {
                    path: self.data_dir.join(HEALTH_FILE),
                    source,
                }
            })?,
            None => HealthResponse::default(),
        };
        health.timestamp = timestamp.to_string();
        Ok(health)
    }

    #[instrument(skip(self))]
    pub async fn forecast_response(&self, timestamp: &str) -> Result<ForecastResponse> {
        let history = self.history().await?;
        let forecast = self.forecast().await?;
        debug!("Loaded {} history entries", history.len());
        Ok(ForecastResponse::new(timestamp, history, forecast))
    }

    #[instrument(skip(self))]
    pub async fn impact_response(&self, timestamp: &str) -> Result<ImpactResponse> {
        Ok(ImpactResponse::new(timestamp, self.risk().await?))
    }

    /// Nodes and edges of the newest graph snapshot.
    ///
    /// Snapshot names sort chronologically, so the last `.json` file by name
    /// wins. No directory or no snapshot yields empty lists.
    #[instrument(skip(self))]
    pub async fn graph_response(&self, timestamp: &str) -> Result<GraphResponse> {
        let Some(path) = self.latest_graph_snapshot().await? else {
            debug!("No graph snapshot in {}", self.graph_dir.display());
            return Ok(GraphResponse::empty(timestamp));
        };

        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SnapshotError::Io { path: path.clone(), source })?;
        let mut graph: GraphResponse = serde_json::from_str(&raw)
            .map_err(|source| SnapshotError::Malformed { path: path.clone(), source })?;
        graph.timestamp = timestamp.to_string();
        debug!(
            "Graph snapshot {} has {} nodes and {} edges",
            path.display(),
            graph.nodes.len(),
            graph.edges.len()
        );
        Ok(graph)
    }

    async fn latest_graph_snapshot(&self) -> Result<Option<PathBuf>> {
        let mut entries = match tokio::fs::read_dir(&self.graph_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SnapshotError::Io {
                    path: self.graph_dir.clone(),
                    source,
                });
            }
        };

        let mut latest: Option<PathBuf> = None;
        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(source) => {
                    return Err(SnapshotError::Io {
                        path: self.graph_dir.clone(),
                        source,
                    });
                }
            };
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            if latest.as_ref().is_none_or(|current| path.file_name() > current.file_name()) {
                latest = Some(path);
            }
        }
        Ok(latest)
    }

    #[instrument(skip(self))]
    pub async fn executive_response(&self, timestamp: &str) -> Result<ExecutiveResponse> {
        Ok(ExecutiveResponse {
            timestamp: timestamp.to_string(),
            summary: Some(DEFAULT_EXECUTIVE_SUMMARY.to_string()),
            forecast_outlook: self.forecast().await?,
            risk_analysis: self.risk().await?,
        })
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Extracts chartable entries from a raw history document.
///
/// Only `timestamp`, `health_score` and `stability_index` survive; the
/// stability index falls back to the one recorded in the entry's `raw`
/// health output. Entries without a numeric score are skipped.
pub fn history_entries(value: Value) -> Vec<HistoryEntry> {
    let Value::Array(entries) = value else {
        warn!("Health history is not a list; ignoring it");
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let health_score = entry.get("health_score")?.as_f64()?;
            let timestamp = entry
                .get("timestamp")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let stability_index = entry
                .get("stability_index")
                .and_then(Value::as_f64)
                .or_else(|| entry.pointer("/raw/stability_index").and_then(Value::as_f64));

            Some(HistoryEntry {
                timestamp,
                health_score,
                stability_index,
            })
        })
        .collect()
}
