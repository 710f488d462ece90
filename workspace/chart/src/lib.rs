pub mod axis;
pub mod curve;
pub mod error;
pub mod gauge;
pub mod hover;
pub mod layout;
pub mod metrics;
pub mod scale;
pub mod scene;
pub mod series;
pub mod svg;
pub mod timeline;

#[cfg(test)]
mod testing;

pub use error::{ChartError, Result};
pub use hover::{Focus, HoverEvent, HoverState, HoverTracker, Tooltip};
pub use layout::{ChartConfig, Dimensions, Margins};
pub use metrics::{ForecastMetrics, ForecastResult, Trend, Volatility, VolatilityClass};
pub use scene::{Primitive, Role, Scene};
pub use timeline::{derive, TimelineModel, TimelineSummary, TimelineView};

