use thiserror::Error;

/// Reasons a forecast response cannot be turned into a chart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// No history snapshots were supplied
    #[error("History is empty")]
    EmptyHistory,

    /// The response carries no forecast object
    #[error("Forecast is missing")]
    MissingForecast,

    /// The forecast object has a field of the wrong JSON type
    #[error("Forecast is malformed: {0}")]
    MalformedForecast(String),

    /// A required forecast field is absent
    #[error("Forecast field `{0}` is missing")]
    MissingField(&'static str),

    /// A required forecast field is NaN or infinite
    #[error("Forecast field `{0}` is not a finite number")]
    NonFinite(&'static str),

    /// A history snapshot has an unusable health score
    #[error("History entry {index} has a non-finite health score")]
    InvalidHistory { index: usize },
}

/// Type alias for Result with ChartError
pub type Result<T> = std::result::Result<T, ChartError>;
