use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// One recorded health snapshot as served by `/forecast/`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HistoryEntry {
    /// ISO-8601 timestamp, with or without a timezone
    #[serde(default)]
    pub timestamp: String,
    /// Architecture health score (0-100)
    pub health_score: f64,
    /// Stability index (0-1), absent on older snapshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability_index: Option<f64>,
}

/// Bounds of the forecast confidence interval.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ConfidenceInterval {
    #[serde(default)]
    pub lower: Option<f64>,
    #[serde(default)]
    pub upper: Option<f64>,
}

/// Lenient view of the forecast object.
///
/// The analytics backend writes this object as-is, so every field may be
/// missing; validation is left to the consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast_next: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_interval: Option<ConfidenceInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rmse: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual_variance: Option<f64>,
    /// Model confidence (0-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    /// "low", "medium" or "high"; other values are passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<String>,
}

/// Response of the `/forecast/` endpoint.
///
/// `forecast` is kept as raw JSON so the server can pass the persisted
/// object through verbatim; use [`ForecastResponse::forecast_payload`] for a
/// typed view.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ForecastResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub forecast: Value,
}

impl ForecastResponse {
    pub fn new(timestamp: impl Into<String>, history: Vec<HistoryEntry>, forecast: Value) -> Self {
        Self {
            timestamp: timestamp.into(),
            history,
            forecast,
        }
    }

    /// The parts a chart is drawn from, with the server stamp cleared.
    ///
    /// Two polls of unchanged snapshots yield equal values, so this is the
    /// key to memoize derivations on.
    pub fn chart_data(&self) -> ForecastResponse {
        Self::new(String::new(), self.history.clone(), self.forecast.clone())
    }

    /// Typed view of the forecast object.
    ///
    /// Returns `Ok(None)` when the field is absent or `null`, and an error when
    /// a field has the wrong JSON type.
    pub fn forecast_payload(&self) -> Result<Option<ForecastPayload>, serde_json::Error> {
        if self.forecast.is_null() {
            tracing::debug!("forecast response carries no forecast object");
            return Ok(None);
        }
        serde_json::from_value(self.forecast.clone()).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_response() {
        let raw = json!({
            "timestamp": "2026-01-01T12:00:00",
            "history": [
                {"timestamp": "2026-01-01T10:00:00Z", "health_score": 81.5, "stability_index": 0.9},
                {"timestamp": "2026-01-01T11:00:00Z", "health_score": 82.0}
            ],
            "forecast": {
                "status": "success",
                "forecast_next": 83.1,
                "confidence_interval": {"lower": 80.0, "upper": 86.2},
                "rmse": 0.42,
                "residual_variance": 0.18,
                "confidence_score": 0.87,
                "volatility": "low",
                "model": "holt"
            }
        });

        let response: ForecastResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[0].stability_index, Some(0.9));
        assert_eq!(response.history[1].stability_index, None);

        let payload = response.forecast_payload().unwrap().unwrap();
        assert_eq!(payload.forecast_next, Some(83.1));
        assert_eq!(payload.volatility.as_deref(), Some("low"));
        assert_eq!(
            payload.confidence_interval,
            Some(ConfidenceInterval { lower: Some(80.0), upper: Some(86.2) })
        );
    }

    #[test]
    fn test_missing_history_defaults_to_empty() {
        let response: ForecastResponse =
            serde_json::from_value(json!({"timestamp": "x", "forecast": {}})).unwrap();
        assert!(response.history.is_empty());
        assert_eq!(response.forecast_payload().unwrap(), Some(ForecastPayload::default()));
    }

    #[test]
    fn test_missing_forecast_is_none() {
        let response: ForecastResponse = serde_json::from_value(json!({"history": []})).unwrap();
        assert!(response.forecast_payload().unwrap().is_none());
    }

    #[test]
    fn test_chart_data_ignores_server_stamp() {
        let forecast = json!({"forecast_next": 80.0});
        let first = ForecastResponse::new("2026-01-01T00:00:00Z", vec![], forecast.clone());
        let second = ForecastResponse::new("2026-01-01T00:00:30Z", vec![], forecast);
        assert_ne!(first, second);
        assert_eq!(first.chart_data(), second.chart_data());

        let changed = ForecastResponse::new("2026-01-01T00:00:30Z", vec![], json!({"forecast_next": 81.0}));
        assert_ne!(first.chart_data(), changed.chart_data());
    }

    #[test]
    fn test_wrongly_typed_forecast_field_is_an_error() {
        let response = ForecastResponse::new("t", vec![], json!({"forecast_next": "high"}));
        assert!(response.forecast_payload().is_err());
    }

    #[test]
    fn test_history_entry_ignores_extra_keys() {
        let entry: HistoryEntry = serde_json::from_value(json!({
            "timestamp": "2026-01-01T00:00:01Z",
            "health_score": 80.0,
            "raw": {"edge_count": 10, "edges": []}
        }))
        .unwrap();
        assert_eq!(entry.health_score, 80.0);

        let back = serde_json::to_value(&entry).unwrap();
        assert!(back.get("raw").is_none());
        assert!(back.get("stability_index").is_none());
    }
}
