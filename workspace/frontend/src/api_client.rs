pub mod executive;
pub mod forecast;
pub mod graph;
pub mod health;
pub mod impact;

use ::common::ErrorResponse;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::settings;

/// Common GET request handler.
///
/// The analytics API returns bare JSON documents, so the body is decoded
/// straight into `T`.
pub async fn get<T>(endpoint: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error_msg = format!("Request failed: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let status = response.status();
        let error_response: Result<ErrorResponse, _> = response.json().await;
        return Err(match error_response {
            Ok(err) => {
                log::error!("GET {} - API error: {}", endpoint, err.error);
                format!("Error: {}", err.error)
            }
            Err(_) => {
                let error_msg = format!("HTTP error: {}", status);
                log::error!("GET {} - {}", endpoint, error_msg);
                error_msg
            }
        });
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let error_msg = format!("Failed to parse response: {}", e);
            log::error!("GET {} - {}", endpoint, error_msg);
            error_msg
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
