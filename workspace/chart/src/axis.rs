//! Axis ticks and their labels.

use serde::Serialize;

use crate::scale::LinearScale;
use crate::series::{PlotPoint, PlotSeries, PointKind};

/// Upper bound on the number of labels along the index axis.
pub const MAX_INDEX_TICKS: usize = 7;
pub const VALUE_TICK_COUNT: usize = 5;

pub const VALUE_AXIS_TITLE: &str = "Architecture Health";
pub const INDEX_AXIS_TITLE: &str = "Snapshots";
pub const FORECAST_LABEL: &str = "Forecast";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    /// Pixel offset along the axis, relative to the plot origin
    pub offset: f64,
    pub value: f64,
    pub label: String,
}

/// Evenly spaced round ticks along the health axis.
pub fn value_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    let step = scale.tick_step(count);
    let decimals = decimals_for_step(step);
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            offset: scale.apply(value),
            value,
            label: format!("{value:.decimals$}"),
        })
        .collect()
}

fn decimals_for_step(step: f64) -> usize {
    if step <= 0.0 || step >= 1.0 || !step.is_finite() {
        0
    } else {
        (-step.log10()).ceil() as usize
    }
}

/// Ticks at integer positions along the index axis.
///
/// At most [`MAX_INDEX_TICKS`] ticks; the forecast position is always
/// labelled, and a regular tick too close to it is dropped so the labels do
/// not overlap.
pub fn index_ticks(series: &PlotSeries, scale: &LinearScale) -> Vec<Tick> {
    let last = series.history_len();
    let step = last.div_ceil(MAX_INDEX_TICKS - 1).max(1);

    let mut positions: Vec<usize> = (0..last).step_by(step).collect();
    if let Some(&penultimate) = positions.last() {
        if positions.len() > 1 && ((last - penultimate) as f64) < step as f64 / 2.0 {
            positions.pop();
        }
    }
    positions.push(last);

    positions
        .into_iter()
        .filter_map(|position| series.get(position))
        .map(|point| Tick {
            offset: scale.apply(point.position as f64),
            value: point.position as f64,
            label: index_label(point),
        })
        .collect()
}

/// Short label for a point on the index axis.
pub fn index_label(point: &PlotPoint) -> String {
    match (point.kind, point.timestamp) {
        (PointKind::Forecast, _) => FORECAST_LABEL.to_string(),
        (PointKind::Historical, Some(instant)) => instant.format("%H:%M").to_string(),
        (PointKind::Historical, None) => format!("#{}", point.position + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{history_of, history_with_gaps};

    fn index_scale(series: &PlotSeries) -> LinearScale {
        LinearScale::new((0.0, series.history_len() as f64), (0.0, 680.0))
    }

    fn positions(ticks: &[Tick]) -> Vec<f64> {
        ticks.iter().map(|tick| tick.value).collect()
    }

    #[test]
    fn test_short_series_labels_every_point() {
        let series = PlotSeries::build(&history_of(4), 80.0).unwrap();
        let ticks = index_ticks(&series, &index_scale(&series));

        assert_eq!(positions(&ticks), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(ticks[0].label, "00:00");
        assert_eq!(ticks[3].label, "03:00");
        assert_eq!(ticks[4].label, "Forecast");
        assert_eq!(ticks[4].offset, 680.0);
    }

    #[test]
    fn test_long_series_is_thinned() {
        for n in [6, 7, 10, 13, 48, 100, 250] {
            let series = PlotSeries::build(&history_of(n), 80.0).unwrap();
            let ticks = index_ticks(&series, &index_scale(&series));

            assert!(ticks.len() <= MAX_INDEX_TICKS, "{n} snapshots gave {} ticks", ticks.len());
            assert_eq!(ticks.first().unwrap().value, 0.0);
            assert_eq!(ticks.last().unwrap().value, n as f64);
            assert_eq!(ticks.last().unwrap().label, FORECAST_LABEL);
        }
    }

    #[test]
    fn test_crowded_tick_before_forecast_is_dropped() {
        // 13 snapshots step by 3: 0, 3, 6, 9, 12, and 12 sits right next to the forecast
        let series = PlotSeries::build(&history_of(13), 80.0).unwrap();
        let ticks = index_ticks(&series, &index_scale(&series));
        assert_eq!(positions(&ticks), vec![0.0, 3.0, 6.0, 9.0, 13.0]);
    }

    #[test]
    fn test_single_snapshot() {
        let series = PlotSeries::build(&history_of(1), 80.0).unwrap();
        let ticks = index_ticks(&series, &index_scale(&series));
        assert_eq!(positions(&ticks), vec![0.0, 1.0]);
    }

    #[test]
    fn test_unparseable_timestamp_label() {
        let series = PlotSeries::build(&history_with_gaps(), 80.0).unwrap();
        let ticks = index_ticks(&series, &index_scale(&series));
        assert_eq!(ticks[0].label, "09:30");
        assert_eq!(ticks[1].label, "#2");
    }

    #[test]
    fn test_value_tick_labels() {
        let scale = LinearScale::new((74.5, 89.25), (320.0, 0.0));
        let ticks = value_ticks(&scale, VALUE_TICK_COUNT);
        let labels: Vec<&str> = ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["76", "78", "80", "82", "84", "86", "88"]);
        assert!(ticks.windows(2).all(|pair| pair[1].offset < pair[0].offset));

        let fine = LinearScale::new((0.0, 1.0), (100.0, 0.0));
        let labels: Vec<String> = value_ticks(&fine, 5).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["0.0", "0.2", "0.4", "0.6", "0.8", "1.0"]);
    }
}
