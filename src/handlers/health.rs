use axum::{extract::State, response::Json};
use common::HealthResponse;
use tracing::{debug, instrument};

use super::response_timestamp;
use crate::schemas::{error_response, ApiError, AppState, CachedData};

const CACHE_KEY: &str = "health";

/// Latest architecture health output
#[utoipa::path(
    get,
    path = "/api/health/",
    tag = "analytics",
    responses(
        (status = 200, description = "Latest health snapshot", body = HealthResponse),
        (status = 500, description = "Snapshot files could not be read", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    if let Some(CachedData::Health(response)) = state.cache.get(CACHE_KEY).await {
        debug!("Health served from cache");
        return Ok(Json(response));
    }

    let response = state
        .store
        .health(&response_timestamp())
        .await
        .map_err(|e| error_response(&e))?;

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Health(response.clone()))
        .await;

    Ok(Json(response))
}
