//! Elapsed-time formatting
//!
//! Renders net activity durations for the live timer and for archived logs.

use crate::constants::{MILLIS_PER_HOUR, MILLIS_PER_SECOND};

const SECS_PER_HOUR: i64 = MILLIS_PER_HOUR / MILLIS_PER_SECOND;

/// Format milliseconds as a clock-style `H:MM:SS` string.
///
/// Negative inputs render as zero.
///
/// # Examples
///
/// ```
/// use daybreak_domain::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00:00");
/// assert_eq!(format_elapsed(65_000), "0:01:05");
/// assert_eq!(format_elapsed(3_725_999), "1:02:05");
/// ```
pub fn format_elapsed(millis: i64) -> String {
    let total_secs = millis.max(0) / MILLIS_PER_SECOND;
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

/// Format milliseconds as a compact human string such as `1h 5m`.
///
/// Seconds are dropped once the duration reaches an hour.
///
/// # Examples
///
/// ```
/// use daybreak_domain::utils::format::format_duration_short;
///
/// assert_eq!(format_duration_short(5_000), "5s");
/// assert_eq!(format_duration_short(65_000), "1m 5s");
/// assert_eq!(format_duration_short(3_900_000), "1h 5m");
/// ```
pub fn format_duration_short(millis: i64) -> String {
    let total_secs = millis.max(0) / MILLIS_PER_SECOND;
    let hours = total_secs / SECS_PER_HOUR;
    let minutes = (total_secs % SECS_PER_HOUR) / 60;
    let seconds = total_secs % 60;

    match (hours, minutes) {
        (0, 0) => format!("{seconds}s"),
        (0, m) => format!("{m}m {seconds}s"),
        (h, m) => format!("{h}h {m}m"),
    }
}
