//! Timestamp helpers for the analytics payloads.
//!
//! The backend emits ISO-8601 strings both with an explicit offset
//! (`2026-01-01T00:00:05Z`) and without one (`2026-01-01T00:00:05.123456`).
//! Naive timestamps are interpreted as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Parses an analytics timestamp, returning `None` when it matches no known format.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    let parsed = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc());

    if parsed.is_none() {
        tracing::trace!(raw, "unrecognised timestamp format");
    }
    parsed
}

/// Formats an instant the way the snapshot server stamps its responses.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}
