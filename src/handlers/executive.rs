use axum::{extract::State, response::Json};
use common::ExecutiveResponse;
use tracing::{debug, instrument};

use super::response_timestamp;
use crate::schemas::{error_response, ApiError, AppState, CachedData};

const CACHE_KEY: &str = "executive";

/// Executive summary with the forecast outlook and risk analysis
#[utoipa::path(
    get,
    path = "/api/executive/",
    tag = "analytics",
    responses(
        (status = 200, description = "Executive snapshot", body = ExecutiveResponse),
        (status = 500, description = "Snapshot files could not be read", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_executive(State(state): State<AppState>) -> Result<Json<ExecutiveResponse>, ApiError> {
    if let Some(CachedData::Executive(response)) = state.cache.get(CACHE_KEY).await {
        debug!("Executive summary served from cache");
        return Ok(Json(response));
    }

    let response = state
        .store
        .executive_response(&response_timestamp())
        .await
        .map_err(|e| error_response(&e))?;

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Executive(response.clone()))
        .await;

    Ok(Json(response))
}
