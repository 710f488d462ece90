//! Chart dimensions and configuration.

use serde::{Deserialize, Serialize};

use crate::scale::VALUE_PADDING;

pub const DEFAULT_WIDTH: f64 = 800.0;
pub const DEFAULT_HEIGHT: f64 = 420.0;
pub const DEFAULT_CLIP_ID: &str = "forecast-timeline-clip";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 40.0,
            bottom: 60.0,
            left: 80.0,
        }
    }
}

/// Outer size of the chart (its SVG viewBox) and the margins around the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    /// Width of the plot area, never below one pixel.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(1.0)
    }

    /// Height of the plot area, never below one pixel.
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margins.top - self.margins.bottom).max(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub dimensions: Dimensions,
    /// Id of the clip path; must be unique within the page
    pub clip_id: String,
    pub value_padding: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            clip_id: DEFAULT_CLIP_ID.to_string(),
            value_padding: VALUE_PADDING,
        }
    }
}

impl ChartConfig {
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            ..Self::default()
        }
    }

    pub fn with_clip_id(mut self, clip_id: impl Into<String>) -> Self {
        self.clip_id = clip_id.into();
        self
    }
}
