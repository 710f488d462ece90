use axum::{extract::State, response::Json};
use tracing::instrument;

use crate::schemas::{AppState, StatusResponse};

/// Service liveness endpoint
#[utoipa::path(
    get,
    path = "/status",
    tag = "status",
    responses(
        (status = 200, description = "Service is running", body = StatusResponse)
    )
)]
#[instrument(skip(state))]
pub async fn status_check(State(state): State<AppState>) -> Json<StatusResponse> {
    let data_dir = match tokio::fs::metadata(state.store.data_dir()).await {
        Ok(metadata) if metadata.is_dir() => "available",
        _ => "missing",
    };

    Json(StatusResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data_dir: data_dir.to_string(),
    })
}
