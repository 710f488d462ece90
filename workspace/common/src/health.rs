use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Summary sentence served by `/executive/` until the narrative engine writes its own.
pub const DEFAULT_EXECUTIVE_SUMMARY: &str = "Architecture shows predictive degradation signals.";

/// Response of the `/health/` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture_health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability_index: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_score: Option<f64>,
    /// Remaining engine output, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HealthResponse {
    /// Health score, preferring `health_score` over the engine's long name.
    pub fn score(&self) -> Option<f64> {
        self.health_score.or(self.architecture_health_score)
    }

    /// Model confidence under either of its names.
    pub fn model_confidence(&self) -> Option<f64> {
        self.confidence.or(self.confidence_score)
    }
}

/// Response of the `/impact/` endpoint: the persisted risk analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ImpactResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub impact_ranking: Value,
}

impl ImpactResponse {
    pub fn new(timestamp: impl Into<String>, impact_ranking: Value) -> Self {
        Self {
            timestamp: timestamp.into(),
            impact_ranking,
        }
    }
}

/// Response of the `/executive/` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ExecutiveResponse {
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub forecast_outlook: Value,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub risk_analysis: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_falls_back_to_engine_name() {
        let health: HealthResponse = serde_json::from_value(json!({
            "timestamp": "2026-01-01T00:00:00",
            "architecture_health_score": 72.5,
            "confidence_score": 0.6
        }))
        .unwrap();

        assert_eq!(health.score(), Some(72.5));
        assert_eq!(health.model_confidence(), Some(0.6));
    }

    #[test]
    fn test_unknown_engine_fields_are_kept() {
        let raw = json!({
            "timestamp": "2026-01-01T00:00:00",
            "health_score": 81.0,
            "components": {"coupling": 0.4, "drift": 0.1},
            "escalation": "none"
        });
        let health: HealthResponse = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(health.score(), Some(81.0));
        assert_eq!(health.extra.get("escalation"), Some(&json!("none")));
        assert!(!health.extra.contains_key("health_score"));
        assert_eq!(serde_json::to_value(&health).unwrap(), raw);
    }

    #[test]
    fn test_impact_response_shape() {
        let impact = ImpactResponse::new("t", json!([{"node": "billing.charge", "score": 0.9}]));
        let value = serde_json::to_value(&impact).unwrap();
        assert_eq!(value["impact_ranking"][0]["node"], "billing.charge");
        assert_eq!(value["timestamp"], "t");
    }

    #[test]
    fn test_executive_without_summary() {
        let executive: ExecutiveResponse =
            serde_json::from_value(json!({"timestamp": "2026-01-01T00:00:00"})).unwrap();
        assert!(executive.summary.is_none());
        assert!(executive.forecast_outlook.is_null());
    }
}
