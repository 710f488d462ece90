pub mod executive;
pub mod forecast;
pub mod graph;
pub mod health;
pub mod impact;
pub mod status;

use chrono::Utc;
use common::timestamp::format_timestamp;

/// Timestamp stamped on every assembled response.
pub(crate) fn response_timestamp() -> String {
    format_timestamp(Utc::now())
}
