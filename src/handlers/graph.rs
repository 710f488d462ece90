use axum::{extract::State, response::Json};
use common::GraphResponse;
use tracing::{debug, instrument};

use super::response_timestamp;
use crate::schemas::{error_response, ApiError, AppState, CachedData};

const CACHE_KEY: &str = "graph";

/// Nodes and edges of the latest recorded call graph
#[utoipa::path(
    get,
    path = "/api/graph/",
    tag = "analytics",
    responses(
        (status = 200, description = "Latest call-graph snapshot; empty lists when none is recorded", body = GraphResponse),
        (status = 500, description = "Snapshot files could not be read", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_graph(State(state): State<AppState>) -> Result<Json<GraphResponse>, ApiError> {
    if let Some(CachedData::Graph(response)) = state.cache.get(CACHE_KEY).await {
        debug!("Call graph served from cache");
        return Ok(Json(response));
    }

    let response = state
        .store
        .graph_response(&response_timestamp())
        .await
        .map_err(|e| error_response(&e))?;

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Graph(response.clone()))
        .await;

    Ok(Json(response))
}
