//! Display values derived from a forecast: delta, trend and volatility.

use common::ForecastPayload;
use serde::Serialize;

use crate::error::{ChartError, Result};
use crate::series::HistoryPoint;

/// Deltas within this band either side of zero read as a flat trend.
pub const TREND_DEADBAND: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    pub fn from_delta(delta: f64) -> Self {
        if delta > TREND_DEADBAND {
            Trend::Up
        } else if delta < -TREND_DEADBAND {
            Trend::Down
        } else {
            Trend::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
            Trend::Flat => "→",
        }
    }

    pub fn text_class(&self) -> &'static str {
        match self {
            Trend::Up => "text-emerald-400",
            Trend::Down => "text-red-400",
            Trend::Flat => "text-neutral-400",
        }
    }
}

/// Volatility as reported by the forecasting model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    Low,
    Medium,
    High,
    /// Any other value, kept verbatim for display
    Other(String),
}

impl Volatility {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("low") => Volatility::Low,
            Some("medium") => Volatility::Medium,
            Some("high") => Volatility::High,
            Some(other) => Volatility::Other(other.to_string()),
            None => Volatility::Other(String::new()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Volatility::Low => "low",
            Volatility::Medium => "medium",
            Volatility::High => "high",
            Volatility::Other(raw) if raw.is_empty() => "unknown",
            Volatility::Other(raw) => raw,
        }
    }

    pub fn class(&self) -> VolatilityClass {
        match self {
            Volatility::Low => VolatilityClass::Calm,
            Volatility::Medium => VolatilityClass::Elevated,
            Volatility::High => VolatilityClass::Severe,
            Volatility::Other(_) => VolatilityClass::Neutral,
        }
    }
}

/// Visual treatment of the volatility badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityClass {
    Calm,
    Elevated,
    Severe,
    Neutral,
}

impl VolatilityClass {
    pub fn badge_class(&self) -> &'static str {
        match self {
            VolatilityClass::Calm => "text-emerald-400 border-emerald-400/30 bg-emerald-400/10",
            VolatilityClass::Elevated => "text-yellow-400 border-yellow-400/30 bg-yellow-400/10",
            VolatilityClass::Severe => "text-red-400 border-red-400/30 bg-red-400/10",
            VolatilityClass::Neutral => "text-neutral-300 border-neutral-700",
        }
    }

    /// Badge colour for exported SVGs.
    pub fn color(&self) -> &'static str {
        match self {
            VolatilityClass::Calm => "#34d399",
            VolatilityClass::Elevated => "#facc15",
            VolatilityClass::Severe => "#f87171",
            VolatilityClass::Neutral => "#a3a3a3",
        }
    }
}

/// A validated forecast snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub status: Option<String>,
    pub forecast_next: f64,
    pub lower: f64,
    pub upper: f64,
    pub rmse: f64,
    pub residual_variance: f64,
    pub confidence_score: f64,
    pub volatility: Volatility,
}

fn required(name: &'static str, value: Option<f64>) -> Result<f64> {
    match value {
        None => Err(ChartError::MissingField(name)),
        Some(value) if !value.is_finite() => Err(ChartError::NonFinite(name)),
        Some(value) => Ok(value),
    }
}

impl ForecastResult {
    /// Validates the lenient wire payload. Every numeric field is required.
    pub fn from_payload(payload: &ForecastPayload) -> Result<Self> {
        let forecast_next = required("forecast_next", payload.forecast_next)?;
        let interval = payload
            .confidence_interval
            .as_ref()
            .ok_or(ChartError::MissingField("confidence_interval"))?;
        let lower = required("confidence_interval.lower", interval.lower)?;
        let upper = required("confidence_interval.upper", interval.upper)?;

        Ok(Self {
            status: payload.status.clone(),
            forecast_next,
            lower: lower.min(upper),
            upper: lower.max(upper),
            rmse: required("rmse", payload.rmse)?,
            residual_variance: required("residual_variance", payload.residual_variance)?,
            confidence_score: required("confidence_score", payload.confidence_score)?,
            volatility: Volatility::parse(payload.volatility.as_deref()),
        })
    }
}

/// Header and footer values of the forecast panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastMetrics {
    pub last_actual: Option<f64>,
    pub forecast_next: f64,
    pub delta: f64,
    pub trend: Trend,
    pub volatility: Volatility,
    pub volatility_class: VolatilityClass,
    pub confidence_percent: f64,
    pub lower: f64,
    pub upper: f64,
    pub rmse: f64,
    pub residual_variance: f64,
}

impl ForecastMetrics {
    pub fn derive(history: &[HistoryPoint], forecast: &ForecastResult) -> Self {
        let last_actual = history.last().map(|point| point.health);
        let delta = match last_actual {
            Some(last) => forecast.forecast_next - last,
            None => 0.0,
        };

        Self {
            last_actual,
            forecast_next: forecast.forecast_next,
            delta,
            trend: Trend::from_delta(delta),
            volatility: forecast.volatility.clone(),
            volatility_class: forecast.volatility.class(),
            confidence_percent: forecast.confidence_score * 100.0,
            lower: forecast.lower,
            upper: forecast.upper,
            rmse: forecast.rmse,
            residual_variance: forecast.residual_variance,
        }
    }

    pub fn delta_display(&self) -> String {
        let sign = if self.delta >= 0.0 { "+" } else { "" };
        format!("{sign}{:.2}", self.delta)
    }

    pub fn forecast_display(&self) -> String {
        format!("{:.2}", self.forecast_next)
    }

    pub fn interval_display(&self) -> String {
        format!("[{:.2}, {:.2}]", self.lower, self.upper)
    }

    pub fn rmse_display(&self) -> String {
        format!("{:.3}", self.rmse)
    }

    pub fn residual_variance_display(&self) -> String {
        format!("{:.3}", self.residual_variance)
    }

    pub fn confidence_display(&self) -> String {
        format!("{:.1}%", self.confidence_percent)
    }
}
