//! Plot series construction.
//!
//! The chart plots the recorded history followed by one synthetic point for
//! the forecast. Positions are ordinal: history entry `i` sits at position
//! `i` and the forecast sits at `N`, the history length.

use chrono::{DateTime, Utc};
use common::{timestamp::parse_timestamp, HistoryEntry};
use serde::Serialize;

use crate::error::{ChartError, Result};

/// A recorded health snapshot, ready for plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub timestamp: Option<DateTime<Utc>>,
    pub health: f64,
    pub stability: Option<f64>,
}

impl HistoryPoint {
    pub fn new(timestamp: Option<DateTime<Utc>>, health: f64, stability: Option<f64>) -> Self {
        Self {
            timestamp,
            health,
            stability,
        }
    }
}

/// Maps wire history entries into plot-ready points.
///
/// A non-finite stability index is treated as absent; a non-finite health
/// score makes the whole history unusable.
pub fn map_history(entries: &[HistoryEntry]) -> Result<Vec<HistoryPoint>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            if !entry.health_score.is_finite() {
                return Err(ChartError::InvalidHistory { index });
            }
            Ok(HistoryPoint {
                timestamp: parse_timestamp(&entry.timestamp),
                health: entry.health_score,
                stability: entry.stability_index.filter(|value| value.is_finite()),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Historical,
    Forecast,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotPoint {
    pub position: usize,
    pub value: f64,
    pub stability: Option<f64>,
    pub timestamp: Option<DateTime<Utc>>,
    pub kind: PointKind,
}

/// History points followed by the synthetic forecast point.
///
/// Always holds at least two points: one recorded snapshot and the forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    points: Vec<PlotPoint>,
}

impl PlotSeries {
    pub fn build(history: &[HistoryPoint], forecast_next: f64) -> Result<Self> {
        if history.is_empty() {
            return Err(ChartError::EmptyHistory);
        }

        let mut points: Vec<PlotPoint> = history
            .iter()
            .enumerate()
            .map(|(position, point)| PlotPoint {
                position,
                value: point.health,
                stability: point.stability,
                timestamp: point.timestamp,
                kind: PointKind::Historical,
            })
            .collect();

        points.push(PlotPoint {
            position: history.len(),
            value: forecast_next,
            stability: None,
            timestamp: None,
            kind: PointKind::Forecast,
        });

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PlotPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlotPoint> {
        self.points.get(index)
    }

    /// Number of recorded snapshots, which is also the forecast's position.
    pub fn history_len(&self) -> usize {
        self.points.len() - 1
    }

    /// The recorded part of the series, drawn solid.
    pub fn historical(&self) -> &[PlotPoint] {
        &self.points[..self.history_len()]
    }

    /// Last recorded point and the forecast point, drawn dashed.
    pub fn forecast_segment(&self) -> &[PlotPoint] {
        &self.points[self.points.len() - 2..]
    }

    pub fn forecast_point(&self) -> &PlotPoint {
        &self.points[self.history_len()]
    }

    pub fn last_actual(&self) -> &PlotPoint {
        &self.points[self.history_len() - 1]
    }

    /// Plotted values, history and forecast alike.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }
}
