use anyhow::Result;
use chart::{Focus, HoverTracker, TimelineSummary, TimelineView};
use serde::Serialize;
use std::path::Path;

use super::load_response;
use crate::config::Settings;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStatus {
    Ready,
    Empty,
    Invalid,
}

/// What `inspect` prints.
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub status: ViewStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TimelineSummary>,
    /// Point resolved from `--hover-x`; null when it fell outside the series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<Option<Focus>>,
}

pub fn inspect_report(view: &TimelineView, hover_x: Option<f64>) -> InspectReport {
    let status = match view {
        TimelineView::Ready(_) => ViewStatus::Ready,
        TimelineView::Empty => ViewStatus::Empty,
        TimelineView::Invalid(_) => ViewStatus::Invalid,
    };

    let model = view.model();
    let hover = match (model, hover_x) {
        (Some(model), Some(x)) => {
            let mut tracker = HoverTracker::new();
            Some(tracker.pointer_move(model, x))
        }
        _ => None,
    };

    InspectReport {
        status,
        message: view.message(),
        summary: model.map(|model| model.summary()),
        hover,
    }
}

pub async fn inspect(settings: &Settings, input: &Path, hover_x: Option<f64>) -> Result<()> {
    let response = load_response(input).await?;
    let view = chart::derive(&response, &settings.chart_config());
    let report = inspect_report(&view, hover_x);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{ForecastResponse, HistoryEntry};
    use serde_json::json;

    fn response(len: usize) -> ForecastResponse {
        let history = (0..len)
            .map(|i| HistoryEntry {
                timestamp: format!("2026-01-01T{:02}:00:00Z", i),
                health_score: 80.0 + i as f64,
                stability_index: Some(0.8),
            })
            .collect();
        ForecastResponse::new(
            "2026-01-01T12:00:00Z",
            history,
            json!({
                "status": "success",
                "forecast_next": 85.0,
                "confidence_interval": {"lower": 83.0, "upper": 87.0},
                "rmse": 0.5,
                "residual_variance": 0.25,
                "confidence_score": 0.9,
                "volatility": "low"
            }),
        )
    }

    #[test]
    fn test_ready_report_with_hover() {
        let view = chart::derive(&response(4), &chart::ChartConfig::default());
        let report = inspect_report(&view, Some(0.0));

        assert!(matches!(report.status, ViewStatus::Ready));
        let summary = report.summary.as_ref().unwrap();
        assert_eq!(summary.history_len, 4);
        assert_eq!(summary.points.len(), 5);

        let focus = report.hover.unwrap().unwrap();
        assert_eq!(focus.index, 0);
        assert_eq!(focus.tooltip.label, "2026-01-01 00:00");
    }

    #[test]
    fn test_hover_outside_series_is_null() {
        let view = chart::derive(&response(4), &chart::ChartConfig::default());
        let report = inspect_report(&view, Some(-500.0));
        assert_eq!(report.hover, Some(None));

        let printed = serde_json::to_value(&report).unwrap();
        assert!(printed["hover"].is_null());
    }

    #[test]
    fn test_empty_report() {
        let view = chart::derive(&response(0), &chart::ChartConfig::default());
        let report = inspect_report(&view, Some(10.0));

        assert!(matches!(report.status, ViewStatus::Empty));
        assert!(report.summary.is_none());
        assert!(report.hover.is_none());
        assert_eq!(report.message.as_deref(), Some(chart::timeline::EMPTY_MESSAGE));
    }
}
