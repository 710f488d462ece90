//! Shared fixtures for the chart tests.

use chrono::{Duration, TimeZone, Utc};
use common::{ForecastResponse, HistoryEntry};
use serde_json::{json, Value};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::series::HistoryPoint;

/// Scoped subscriber writing derivation logs to stderr.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// `n` hourly snapshots starting 2026-01-01 00:00 UTC with a gentle wave in health.
pub fn history_of(n: usize) -> Vec<HistoryPoint> {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    (0..n)
        .map(|i| {
            HistoryPoint::new(
                Some(start + Duration::hours(i as i64)),
                80.0 + (i % 3) as f64 * 1.5,
                Some(0.8 + (i % 2) as f64 * 0.05),
            )
        })
        .collect()
}

/// Three snapshots, the middle one without a stability index or a parseable timestamp.
pub fn history_with_gaps() -> Vec<HistoryPoint> {
    let start = Utc.with_ymd_and_hms(2026, 1, 1, 9, 30, 0).unwrap();
    vec![
        HistoryPoint::new(Some(start), 82.25, Some(0.91)),
        HistoryPoint::new(None, 79.5, None),
        HistoryPoint::new(Some(start + Duration::hours(2)), 81.0, Some(0.75)),
    ]
}

pub fn forecast_json(forecast_next: f64, volatility: &str) -> Value {
    json!({
        "status": "success",
        "forecast_next": forecast_next,
        "confidence_interval": {"lower": forecast_next - 3.0, "upper": forecast_next + 3.0},
        "rmse": 0.42157,
        "residual_variance": 0.1777,
        "confidence_score": 0.873,
        "volatility": volatility
    })
}

pub fn history_entries(n: usize) -> Vec<HistoryEntry> {
    history_of(n)
        .into_iter()
        .map(|point| HistoryEntry {
            timestamp: point
                .timestamp
                .map(|instant| instant.to_rfc3339())
                .unwrap_or_default(),
            health_score: point.health,
            stability_index: point.stability,
        })
        .collect()
}

pub fn response_of(n: usize, forecast: Value) -> ForecastResponse {
    ForecastResponse::new("2026-01-02T00:00:00", history_entries(n), forecast)
}

pub fn sample_response(n: usize) -> ForecastResponse {
    response_of(n, forecast_json(84.0, "medium"))
}
