//! Health gauge banding.

use common::HealthResponse;
use serde::Serialize;

pub const HEALTHY_THRESHOLD: f64 = 80.0;
pub const WATCH_THRESHOLD: f64 = 60.0;
pub const MISSING_VALUE: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthBand {
    Healthy,
    Watch,
    Critical,
    Unknown,
}

impl HealthBand {
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            HealthBand::Unknown
        } else if score >= HEALTHY_THRESHOLD {
            HealthBand::Healthy
        } else if score >= WATCH_THRESHOLD {
            HealthBand::Watch
        } else {
            HealthBand::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "Healthy",
            HealthBand::Watch => "Watch",
            HealthBand::Critical => "Critical",
            HealthBand::Unknown => "Unknown",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "text-emerald-400",
            HealthBand::Watch => "text-yellow-400",
            HealthBand::Critical => "text-red-500",
            HealthBand::Unknown => "text-neutral-400",
        }
    }
}

/// Display values of the health gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    pub score: Option<f64>,
    pub band: HealthBand,
    pub stability: String,
    pub risk: String,
    pub confidence: String,
}

impl GaugeReading {
    pub fn from_response(health: &HealthResponse) -> Self {
        let score = health.score();
        Self {
            score,
            band: score.map_or(HealthBand::Unknown, HealthBand::from_score),
            stability: number_or_missing(health.stability_index),
            risk: health
                .risk_label
                .clone()
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            confidence: number_or_missing(health.model_confidence()),
        }
    }

    pub fn score_display(&self) -> String {
        match self.score {
            Some(score) if score.is_finite() => format!("{score:.1}"),
            _ => MISSING_VALUE.to_string(),
        }
    }
}

fn number_or_missing(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => format!("{value:.2}"),
        _ => MISSING_VALUE.to_string(),
    }
}
