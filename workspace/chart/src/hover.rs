//! Hover interaction: pointer position to nearest point, plus the tooltip.

use serde::Serialize;

use crate::axis::FORECAST_LABEL;
use crate::scale::LinearScale;
use crate::series::{PlotPoint, PointKind};
use crate::timeline::TimelineModel;

/// Tooltip offset from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (15.0, -50.0);
pub const STABILITY_FALLBACK: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum HoverState {
    #[default]
    Idle,
    Hovering {
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer moved; carries the resolved index, `None` when off the series
    PointerMove(Option<usize>),
    PointerLeave,
    /// New data arrived
    Reset,
}

impl HoverState {
    pub fn next(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::PointerMove(Some(index)) => HoverState::Hovering { index },
            HoverEvent::PointerMove(None) => self,
            HoverEvent::PointerLeave | HoverEvent::Reset => HoverState::Idle,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            HoverState::Idle => None,
            HoverState::Hovering { index } => Some(*index),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, HoverState::Hovering { .. })
    }
}

/// Nearest series index under the horizontal plot coordinate `x`.
///
/// Rounds the inverted position half away from zero; positions outside
/// `[0, last]` resolve to nothing.
pub fn resolve_index(x_scale: &LinearScale, x: f64, last: usize) -> Option<usize> {
    if !x.is_finite() {
        return None;
    }
    let position = x_scale.invert(x).round();
    if !position.is_finite() || position < 0.0 || position > last as f64 {
        return None;
    }
    Some(position as usize)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub label: String,
    pub health: f64,
    pub stability: Option<f64>,
}

impl Tooltip {
    pub fn for_point(point: &PlotPoint) -> Self {
        let label = match (point.kind, point.timestamp) {
            (PointKind::Forecast, _) => FORECAST_LABEL.to_string(),
            (PointKind::Historical, Some(instant)) => instant.format("%Y-%m-%d %H:%M").to_string(),
            (PointKind::Historical, None) => format!("Snapshot {}", point.position + 1),
        };
        Self {
            label,
            health: point.value,
            stability: point.stability,
        }
    }

    pub fn health_display(&self) -> String {
        format!("{:.2}", self.health)
    }

    pub fn stability_display(&self) -> String {
        match self.stability {
            Some(stability) => format!("{stability:.2}"),
            None => STABILITY_FALLBACK.to_string(),
        }
    }
}

/// Where the focus marker goes and what the tooltip shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Focus {
    pub index: usize,
    /// Plot coordinates of the hovered point
    pub x: f64,
    pub y: f64,
    pub tooltip: Tooltip,
}

/// Tooltip anchor for a pointer at `(x, y)`.
pub fn tooltip_position(pointer_x: f64, pointer_y: f64) -> (f64, f64) {
    (pointer_x + TOOLTIP_OFFSET.0, pointer_y + TOOLTIP_OFFSET.1)
}

/// Converts a pointer's client x into plot coordinates.
///
/// `rendered_left` and `rendered_width` describe the SVG element on screen;
/// the drawing uses a `viewbox_width` wide coordinate system whose plot area
/// starts at `margin_left`. Returns NaN when the element has no width.
pub fn client_to_plot_x(
    client_x: f64,
    rendered_left: f64,
    rendered_width: f64,
    viewbox_width: f64,
    margin_left: f64,
) -> f64 {
    if rendered_width <= 0.0 {
        return f64::NAN;
    }
    (client_x - rendered_left) * (viewbox_width / rendered_width) - margin_left
}

/// Hover state bound to one model.
///
/// Used by the offline inspector and the tests; the browser component keeps
/// the same state in a reducer.
#[derive(Debug, Default)]
pub struct HoverTracker {
    state: HoverState,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HoverState {
        self.state
    }

    /// Moves the focus to the point nearest `x`; `None` leaves the state as is.
    pub fn pointer_move(&mut self, model: &TimelineModel, x: f64) -> Option<Focus> {
        let index = model.resolve_index(x);
        self.state = self.state.next(HoverEvent::PointerMove(index));
        index.and_then(|index| model.focus(index))
    }

    pub fn pointer_leave(&mut self) {
        self.state = self.state.next(HoverEvent::PointerLeave);
    }

    pub fn reset(&mut self) {
        self.state = self.state.next(HoverEvent::Reset);
    }

    /// Focus of the currently hovered point, if any.
    pub fn focus(&self, model: &TimelineModel) -> Option<Focus> {
        self.state.index().and_then(|index| model.focus(index))
    }
}
