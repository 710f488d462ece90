use ::common::ImpactResponse;
use crate::api_client;

/// Get the impact ranking from the latest risk analysis
pub async fn get_impact() -> Result<ImpactResponse, String> {
    log::trace!("Fetching impact ranking");
    let result: Result<ImpactResponse, String> = api_client::get("/impact/").await;
    if let Err(e) = &result {
        log::error!("Failed to fetch impact ranking: {}", e);
    }
    result
}
