mod stats;
mod timeline;
mod view;

pub use view::ForecastPanel;
