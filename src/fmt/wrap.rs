//! Line prefixing: `[<timestamp> <LEVEL>] <message>`.

use chrono::{DateTime, Local, TimeZone};

/// Local wall clock, second resolution, no zone suffix.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefixes `msg` with the current local time and the uppercased level name.
#[must_use]
pub fn wrap_time(level: &str, msg: &str) -> String {
    wrap_time_at(level, msg, &Local::now())
}

/// Same as [`wrap_time`] with an explicit clock reading.
///
/// The level name is uppercased verbatim, so unknown names show up as typed.
#[must_use]
pub fn wrap_time_at<Tz>(level: &str, msg: &str, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let timestamp = at.format(TIMESTAMP_FORMAT);
    let tag = level.to_uppercase();
    format!("[{timestamp} {tag}] {msg}")
}
