//! Forecast timeline derivation.
//!
//! [`derive`] turns one forecast response into everything the chart needs:
//! display metrics, the plot series, both scales and the drawing scene. It
//! is pure; a new response always produces a new model.

use common::ForecastResponse;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::hover::{self, Focus, Tooltip};
use crate::layout::ChartConfig;
use crate::metrics::{ForecastMetrics, ForecastResult};
use crate::scale::{padded_domain, LinearScale};
use crate::scene::Scene;
use crate::series::{map_history, HistoryPoint, PlotSeries, PointKind};

pub const EMPTY_MESSAGE: &str = "No forecast history available yet.";

/// Outcome of a derivation.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineView {
    /// No history: nothing is drawn
    Empty,
    /// The response could not be charted
    Invalid(ChartError),
    Ready(Box<TimelineModel>),
}

impl TimelineView {
    pub fn model(&self) -> Option<&TimelineModel> {
        match self {
            TimelineView::Ready(model) => Some(model),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, TimelineView::Ready(_))
    }

    /// Text shown in place of the chart when there is nothing to draw.
    pub fn message(&self) -> Option<String> {
        match self {
            TimelineView::Empty => Some(EMPTY_MESSAGE.to_string()),
            TimelineView::Invalid(error) => Some(format!("Forecast unavailable: {error}")),
            TimelineView::Ready(_) => None,
        }
    }
}

/// Derives the chart for `response`. Never panics on malformed input.
pub fn derive(response: &ForecastResponse, config: &ChartConfig) -> TimelineView {
    if response.history.is_empty() {
        debug!("Forecast response has no history");
        return TimelineView::Empty;
    }

    match build_model(response, config) {
        Ok(model) => {
            debug!(
                "Derived forecast timeline with {} snapshots, forecast {:.2}",
                model.series.history_len(),
                model.forecast.forecast_next
            );
            TimelineView::Ready(Box::new(model))
        }
        Err(ChartError::EmptyHistory) => TimelineView::Empty,
        Err(error) => {
            warn!("Forecast response cannot be charted: {}", error);
            TimelineView::Invalid(error)
        }
    }
}

fn build_model(response: &ForecastResponse, config: &ChartConfig) -> Result<TimelineModel> {
    let history = map_history(&response.history)?;
    let forecast = forecast_result(response)?;
    TimelineModel::build(&history, forecast, config)
}

fn forecast_result(response: &ForecastResponse) -> Result<ForecastResult> {
    let is_blank = match &response.forecast {
        serde_json::Value::Null => true,
        serde_json::Value::Object(fields) => fields.is_empty(),
        _ => false,
    };
    if is_blank {
        return Err(ChartError::MissingForecast);
    }

    let payload = response
        .forecast_payload()
        .map_err(|e| ChartError::MalformedForecast(e.to_string()))?
        .ok_or(ChartError::MissingForecast)?;
    ForecastResult::from_payload(&payload)
}

/// Everything needed to draw and interact with one forecast timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineModel {
    forecast: ForecastResult,
    metrics: ForecastMetrics,
    series: PlotSeries,
    x_scale: LinearScale,
    y_scale: LinearScale,
    scene: Scene,
}

impl TimelineModel {
    pub fn build(history: &[HistoryPoint], forecast: ForecastResult, config: &ChartConfig) -> Result<Self> {
        let series = PlotSeries::build(history, forecast.forecast_next)?;
        let metrics = ForecastMetrics::derive(history, &forecast);

        let dimensions = config.dimensions;
        let last = series.history_len() as f64;
        let x_scale = LinearScale::new((0.0, last), (0.0, dimensions.inner_width()));
        let y_domain = padded_domain(series.values(), config.value_padding)
            .ok_or(ChartError::NonFinite("health_score"))?;
        let y_scale = LinearScale::new(y_domain, (dimensions.inner_height(), 0.0));

        let scene = Scene::build(&series, &forecast, &x_scale, &y_scale, config);

        Ok(Self {
            forecast,
            metrics,
            series,
            x_scale,
            y_scale,
            scene,
        })
    }

    pub fn forecast(&self) -> &ForecastResult {
        &self.forecast
    }

    pub fn metrics(&self) -> &ForecastMetrics {
        &self.metrics
    }

    pub fn series(&self) -> &PlotSeries {
        &self.series
    }

    pub fn x_scale(&self) -> &LinearScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y_scale
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Series index nearest the plot coordinate `x`.
    pub fn resolve_index(&self, x: f64) -> Option<usize> {
        hover::resolve_index(&self.x_scale, x, self.series.history_len())
    }

    /// Plot coordinates of the point at `index`.
    pub fn point_position(&self, index: usize) -> Option<(f64, f64)> {
        self.series.get(index).map(|point| {
            (
                self.x_scale.apply(point.position as f64),
                self.y_scale.apply(point.value),
            )
        })
    }

    pub fn focus(&self, index: usize) -> Option<Focus> {
        let point = self.series.get(index)?;
        let (x, y) = self.point_position(index)?;
        Some(Focus {
            index,
            x,
            y,
            tooltip: Tooltip::for_point(point),
        })
    }

    pub fn focus_at(&self, x: f64) -> Option<Focus> {
        self.resolve_index(x).and_then(|index| self.focus(index))
    }

    pub fn summary(&self) -> TimelineSummary {
        TimelineSummary {
            history_len: self.series.history_len(),
            metrics: self.metrics.clone(),
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
            points: self
                .series
                .points()
                .iter()
                .map(|point| SummaryPoint {
                    position: point.position,
                    kind: point.kind,
                    value: point.value,
                    stability: point.stability,
                    x: self.x_scale.apply(point.position as f64),
                    y: self.y_scale.apply(point.value),
                })
                .collect(),
        }
    }
}

/// Serializable digest of a model, printed by `inspect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSummary {
    pub history_len: usize,
    pub metrics: ForecastMetrics,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub points: Vec<SummaryPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryPoint {
    pub position: usize,
    pub kind: PointKind,
    pub value: f64,
    pub stability: Option<f64>,
    pub x: f64,
    pub y: f64,
}
