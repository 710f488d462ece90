pub mod inspect;
pub mod render;
pub mod serve;

pub use inspect::inspect;
pub use render::render;
pub use serve::serve;

use anyhow::{Context, Result};
use common::ForecastResponse;
use std::path::Path;
use tracing::debug;

use crate::handlers::response_timestamp;
use crate::snapshots::SnapshotStore;

/// Loads a forecast response from a saved response file or a data directory.
pub async fn load_response(input: &Path) -> Result<ForecastResponse> {
    if input.is_dir() {
        debug!("Assembling forecast from data directory {}", input.display());
        let store = SnapshotStore::new(input);
        return Ok(store.forecast_response(&response_timestamp()).await?);
    }

    let raw = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a forecast response", input.display()))
}
