//! Common transport-layer types shared between the snapshot server and the frontend.
//! These structs mirror the analytics API payloads so the dashboard can
//! deserialize responses without duplicating shapes.

mod forecast;
mod graph;
mod health;
pub mod timestamp;

pub use forecast::{ConfidenceInterval, ForecastPayload, ForecastResponse, HistoryEntry};
pub use graph::GraphResponse;
pub use health::{ExecutiveResponse, HealthResponse, ImpactResponse, DEFAULT_EXECUTIVE_SUMMARY};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error payload returned by the snapshot server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success flag (always false for errors)
    pub success: bool,
}
