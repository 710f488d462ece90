use ::common::ExecutiveResponse;
use crate::api_client;

/// Get the executive summary
pub async fn get_executive() -> Result<ExecutiveResponse, String> {
    log::trace!("Fetching executive summary");
    let result: Result<ExecutiveResponse, String> = api_client::get("/executive/").await;
    if let Err(e) = &result {
        log::error!("Failed to fetch executive summary: {}", e);
    }
    result
}
