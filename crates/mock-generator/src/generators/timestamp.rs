//! Current-time generators for the `date` domain kind.
//!
//! These are NOT deterministic - each call reads the clock.

use chrono::{Local, Utc};
use std::fmt::Write;
use tracing::warn;

/// Layout used when a `date` string target has no `format(...)`.
pub const DEFAULT_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %z %Z %Y";

/// Current Unix time in the unit named by `unit`: `ns`, `ms`, or seconds
/// for anything else.
pub fn timestamp_now(unit: &str) -> i64 {
    let now = Utc::now();
    match unit {
        "ns" => now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis().saturating_mul(1_000_000)),
        "ms" => now.timestamp_millis(),
        _ => now.timestamp(),
    }
}

/// Current local time rendered with a strftime-style `format`.
///
/// An empty format uses [`DEFAULT_DATE_FORMAT`]; an invalid one falls back
/// to it as well.
pub fn format_now(format: &str) -> String {
    let now = Local::now();
    let format = if format.is_empty() {
        DEFAULT_DATE_FORMAT
    } else {
        format
    };

    let mut rendered = String::new();
    if write!(rendered, "{}", now.format(format)).is_err() {
        warn!(format, "Invalid date format, using default layout");
        rendered.clear();
        let _ = write!(rendered, "{}", now.format(DEFAULT_DATE_FORMAT));
    }
    rendered
}
