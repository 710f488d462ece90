use ::common::HealthResponse;
use crate::api_client;

/// Get the current architecture health
pub async fn get_health() -> Result<HealthResponse, String> {
    log::trace!("Fetching health");
    let result: Result<HealthResponse, String> = api_client::get("/health/").await;
    match &result {
        Ok(health) => log::info!("Fetched health score {:?}", health.score()),
        Err(e) => log::error!("Failed to fetch health: {}", e),
    }
    result
}
