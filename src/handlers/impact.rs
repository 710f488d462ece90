use axum::{extract::State, response::Json};
use common::ImpactResponse;
use tracing::{debug, instrument};

use super::response_timestamp;
use crate::schemas::{error_response, ApiError, AppState, CachedData};

const CACHE_KEY: &str = "impact";

/// Impact ranking from the persisted risk analysis
#[utoipa::path(
    get,
    path = "/api/impact/",
    tag = "analytics",
    responses(
        (status = 200, description = "Impact ranking snapshot", body = ImpactResponse),
        (status = 500, description = "Snapshot files could not be read", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_impact(State(state): State<AppState>) -> Result<Json<ImpactResponse>, ApiError> {
    if let Some(CachedData::Impact(response)) = state.cache.get(CACHE_KEY).await {
        debug!("Impact ranking served from cache");
        return Ok(Json(response));
    }

    let response = state
        .store
        .impact_response(&response_timestamp())
        .await
        .map_err(|e| error_response(&e))?;

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Impact(response.clone()))
        .await;

    Ok(Json(response))
}
