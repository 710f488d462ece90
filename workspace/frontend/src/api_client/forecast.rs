use ::common::ForecastResponse;
use crate::api_client;

/// Get the health history and the latest forecast
pub async fn get_forecast() -> Result<ForecastResponse, String> {
    log::trace!("Fetching forecast");
    let result: Result<ForecastResponse, String> = api_client::get("/forecast/").await;
    match &result {
        Ok(forecast) => log::info!("Fetched forecast with {} history snapshots", forecast.history.len()),
        Err(e) => log::error!("Failed to fetch forecast: {}", e),
    }
    result
}
