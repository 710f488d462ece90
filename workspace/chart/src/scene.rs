//! Drawing instructions for the forecast timeline.
//!
//! A [`Scene`] is a flat list of primitives in plot coordinates (origin at
//! the top-left corner of the plot area). It is rebuilt from scratch on every
//! derivation; renderers only translate it to SVG, in the browser or offline.

use serde::Serialize;

use crate::axis::{self, Tick};
use crate::curve::{linear_path, monotone_x_path, Point};
use crate::layout::{ChartConfig, Margins};
use crate::metrics::ForecastResult;
use crate::scale::LinearScale;
use crate::series::{PlotPoint, PlotSeries};

/// Width of the confidence band around the forecast position, in pixels.
pub const BAND_WIDTH: f64 = 12.0;
pub const MARKER_RADIUS: f64 = 5.0;
pub const FOCUS_RADIUS: f64 = 6.0;
pub const FORECAST_DASH: &str = "6,4";

pub const GRID_COLOR: &str = "#1a1a1a";
pub const AXIS_COLOR: &str = "#404040";
pub const TICK_TEXT_COLOR: &str = "#aaaaaa";
pub const TITLE_COLOR: &str = "#666666";
pub const ACTUAL_COLOR: &str = "#818cf8";
pub const FORECAST_COLOR: &str = "#a5b4fc";
pub const MARKER_COLOR: &str = "#6366f1";
pub const BAND_COLOR: &str = "#6366f1";
pub const FOCUS_COLOR: &str = "#ffffff";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub stroke: Option<&'static str>,
    pub stroke_width: f64,
    pub fill: Option<&'static str>,
    pub dash: Option<&'static str>,
    pub opacity: f64,
    pub font_size: Option<f64>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke: None,
            stroke_width: 1.0,
            fill: None,
            dash: None,
            opacity: 1.0,
            font_size: None,
        }
    }
}

impl Style {
    pub fn stroke(color: &'static str, width: f64) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn fill(color: &'static str) -> Self {
        Self {
            fill: Some(color),
            ..Self::default()
        }
    }

    pub fn text(color: &'static str, font_size: f64) -> Self {
        Self {
            fill: Some(color),
            font_size: Some(font_size),
            ..Self::default()
        }
    }

    fn dashed(mut self, dash: &'static str) -> Self {
        self.dash = Some(dash);
        self
    }

    fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

/// What a primitive depicts, so renderers can attach ids or classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Grid,
    Axis,
    TickLabel,
    AxisTitle,
    ConfidenceBand,
    ActualLine,
    ForecastLine,
    ForecastMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Line {
        role: Role,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: Style,
    },
    Path {
        role: Role,
        d: String,
        style: Style,
    },
    Circle {
        role: Role,
        cx: f64,
        cy: f64,
        r: f64,
        style: Style,
    },
    Rect {
        role: Role,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: Style,
    },
    Text {
        role: Role,
        x: f64,
        y: f64,
        content: String,
        anchor: TextAnchor,
        /// Rotation in degrees around the origin of the plot area
        rotate: Option<f64>,
        style: Style,
    },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { role, .. }
            | Primitive::Path { role, .. }
            | Primitive::Circle { role, .. }
            | Primitive::Rect { role, .. }
            | Primitive::Text { role, .. } => *role,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub inner_width: f64,
    pub inner_height: f64,
    pub clip_id: String,
    /// Grid, axes and labels, drawn outside the clip path
    pub axes: Vec<Primitive>,
    /// Band and series, drawn inside the clip path
    pub series: Vec<Primitive>,
}

impl Scene {
    pub fn build(
        series: &PlotSeries,
        forecast: &ForecastResult,
        x_scale: &LinearScale,
        y_scale: &LinearScale,
        config: &ChartConfig,
    ) -> Self {
        let dimensions = config.dimensions;
        let inner_width = dimensions.inner_width();
        let inner_height = dimensions.inner_height();

        let value_ticks = axis::value_ticks(y_scale, axis::VALUE_TICK_COUNT);
        let index_ticks = axis::index_ticks(series, x_scale);

        let mut axes = Vec::new();
        axes.extend(grid_lines(&value_ticks, inner_width));
        axes.extend(value_axis(&value_ticks, inner_height));
        axes.extend(index_axis(&index_ticks, inner_width, inner_height));
        axes.extend(axis_titles(inner_width, inner_height));

        let to_point = |point: &PlotPoint| {
            Point::new(x_scale.apply(point.position as f64), y_scale.apply(point.value))
        };
        let actual: Vec<Point> = series.historical().iter().map(to_point).collect();
        let extension: Vec<Point> = series.forecast_segment().iter().map(to_point).collect();
        let marker = to_point(series.forecast_point());

        let layer = vec![
            confidence_band(forecast, marker.x, y_scale, inner_width),
            Primitive::Path {
                role: Role::ActualLine,
                d: monotone_x_path(&actual),
                style: Style::stroke(ACTUAL_COLOR, 3.0),
            },
            Primitive::Path {
                role: Role::ForecastLine,
                d: linear_path(&extension),
                style: Style::stroke(FORECAST_COLOR, 2.0).dashed(FORECAST_DASH),
            },
            Primitive::Circle {
                role: Role::ForecastMarker,
                cx: marker.x,
                cy: marker.y,
                r: MARKER_RADIUS,
                style: Style::fill(MARKER_COLOR),
            },
        ];

        Self {
            width: dimensions.width,
            height: dimensions.height,
            margins: dimensions.margins,
            inner_width,
            inner_height,
            clip_id: config.clip_id.clone(),
            axes,
            series: layer,
        }
    }

    pub fn find(&self, role: Role) -> Option<&Primitive> {
        self.axes
            .iter()
            .chain(self.series.iter())
            .find(|primitive| primitive.role() == role)
    }
}

fn grid_lines(ticks: &[Tick], inner_width: f64) -> impl Iterator<Item = Primitive> + '_ {
    ticks.iter().map(move |tick| Primitive::Line {
        role: Role::Grid,
        x1: 0.0,
        y1: tick.offset,
        x2: inner_width,
        y2: tick.offset,
        style: Style::stroke(GRID_COLOR, 1.0),
    })
}

fn value_axis(ticks: &[Tick], inner_height: f64) -> Vec<Primitive> {
    let mut primitives = vec![Primitive::Line {
        role: Role::Axis,
        x1: 0.0,
        y1: 0.0,
        x2: 0.0,
        y2: inner_height,
        style: Style::stroke(AXIS_COLOR, 1.0),
    }];
    for tick in ticks {
        primitives.push(Primitive::Line {
            role: Role::Axis,
            x1: -6.0,
            y1: tick.offset,
            x2: 0.0,
            y2: tick.offset,
            style: Style::stroke(AXIS_COLOR, 1.0),
        });
        primitives.push(Primitive::Text {
            role: Role::TickLabel,
            x: -9.0,
            y: tick.offset + 4.0,
            content: tick.label.clone(),
            anchor: TextAnchor::End,
            rotate: None,
            style: Style::text(TICK_TEXT_COLOR, 11.0),
        });
    }
    primitives
}

fn index_axis(ticks: &[Tick], inner_width: f64, inner_height: f64) -> Vec<Primitive> {
    let mut primitives = vec![Primitive::Line {
        role: Role::Axis,
        x1: 0.0,
        y1: inner_height,
        x2: inner_width,
        y2: inner_height,
        style: Style::stroke(AXIS_COLOR, 1.0),
    }];
    for tick in ticks {
        primitives.push(Primitive::Line {
            role: Role::Axis,
            x1: tick.offset,
            y1: inner_height,
            x2: tick.offset,
            y2: inner_height + 6.0,
            style: Style::stroke(AXIS_COLOR, 1.0),
        });
        primitives.push(Primitive::Text {
            role: Role::TickLabel,
            x: tick.offset,
            y: inner_height + 20.0,
            content: tick.label.clone(),
            anchor: TextAnchor::Middle,
            rotate: None,
            style: Style::text(TICK_TEXT_COLOR, 11.0),
        });
    }
    primitives
}

fn axis_titles(inner_width: f64, inner_height: f64) -> [Primitive; 2] {
    [
        Primitive::Text {
            role: Role::AxisTitle,
            x: -inner_height / 2.0,
            y: -60.0,
            content: axis::VALUE_AXIS_TITLE.to_string(),
            anchor: TextAnchor::Middle,
            rotate: Some(-90.0),
            style: Style::text(TITLE_COLOR, 12.0),
        },
        Primitive::Text {
            role: Role::AxisTitle,
            x: inner_width / 2.0,
            y: inner_height + 45.0,
            content: axis::INDEX_AXIS_TITLE.to_string(),
            anchor: TextAnchor::Middle,
            rotate: None,
            style: Style::text(TITLE_COLOR, 12.0),
        },
    ]
}

/// Shaded band spanning the confidence interval at the forecast position.
fn confidence_band(
    forecast: &ForecastResult,
    center_x: f64,
    y_scale: &LinearScale,
    inner_width: f64,
) -> Primitive {
    let left = (center_x - BAND_WIDTH / 2.0).max(0.0);
    let right = (center_x + BAND_WIDTH / 2.0).min(inner_width);
    let (top, bottom) = {
        let a = y_scale.apply(forecast.upper);
        let b = y_scale.apply(forecast.lower);
        (a.min(b), a.max(b))
    };

    Primitive::Rect {
        role: Role::ConfidenceBand,
        x: left,
        y: top,
        width: (right - left).max(0.0),
        height: bottom - top,
        style: Style::fill(BAND_COLOR).with_opacity(0.2),
    }
}
