use axum::{http::StatusCode, response::Json};
use common::{
    ConfidenceInterval, ErrorResponse, ExecutiveResponse, ForecastPayload, ForecastResponse,
    GraphResponse, HealthResponse, HistoryEntry, ImpactResponse,
};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::snapshots::{SnapshotError, SnapshotStore};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Snapshot files written by the analytics backend
    pub store: Arc<SnapshotStore>,
    /// Short-lived cache of assembled responses
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Forecast(ForecastResponse),
    Health(HealthResponse),
    Executive(ExecutiveResponse),
    Impact(ImpactResponse),
    Graph(GraphResponse),
}

/// Service liveness response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the snapshot directory exists ("available" or "missing")
    pub data_dir: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Maps a store failure onto the JSON error body.
pub fn error_response(error: &SnapshotError) -> ApiError {
    tracing::error!("Snapshot store failure: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: error.to_string(),
            code: error.code().to_string(),
            success: false,
        }),
    )
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::status::status_check,
        crate::handlers::forecast::get_forecast,
        crate::handlers::health::get_health,
        crate::handlers::executive::get_executive,
        crate::handlers::impact::get_impact,
        crate::handlers::graph::get_graph,
    ),
    components(
        schemas(
            ErrorResponse,
            StatusResponse,
            ForecastResponse,
            HistoryEntry,
            ForecastPayload,
            ConfidenceInterval,
            HealthResponse,
            ExecutiveResponse,
            ImpactResponse,
            GraphResponse,
        )
    ),
    tags(
        (name = "status", description = "Service liveness"),
        (name = "analytics", description = "Analytics snapshot endpoints"),
    ),
    info(
        title = "SES Dashboard API",
        description = "Serves the architecture health, forecast, impact, call-graph and executive snapshots consumed by the dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
