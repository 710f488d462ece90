use axum::{extract::State, response::Json};
use common::ForecastResponse;
use tracing::{debug, instrument};

use super::response_timestamp;
use crate::schemas::{error_response, ApiError, AppState, CachedData};

const CACHE_KEY: &str = "forecast";

/// Health history plus the latest persisted forecast
#[utoipa::path(
    get,
    path = "/api/forecast/",
    tag = "analytics",
    responses(
        (status = 200, description = "History and forecast snapshot", body = ForecastResponse),
        (status = 500, description = "Snapshot files could not be read", body = common::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_forecast(State(state): State<AppState>) -> Result<Json<ForecastResponse>, ApiError> {
    if let Some(CachedData::Forecast(response)) = state.cache.get(CACHE_KEY).await {
        debug!("Forecast served from cache");
        return Ok(Json(response));
    }

    let response = state
        .store
        .forecast_response(&response_timestamp())
        .await
        .map_err(|e| error_response(&e))?;

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Forecast(response.clone()))
        .await;

    Ok(Json(response))
}
