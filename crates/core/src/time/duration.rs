//! Net elapsed duration of an activity log
//!
//! The live timer and `stop()` both go through
//! [`calculate_accumulated_duration`]; there is no second implementation.

use daybreak_domain::{ActivityLog, EpochMillis};

/// Total paused time of `log` as of `now`.
///
/// Closed intervals contribute `resumedAt - pausedAt`; the open interval, if
/// any, contributes `now - pausedAt`. Intervals are trusted to be ordered and
/// non-overlapping.
pub fn pause_total(log: &ActivityLog, now: EpochMillis) -> i64 {
    log.pause_intervals.iter().map(|interval| interval.span(now)).sum()
}

/// Elapsed milliseconds since `start_time` minus all pause spans.
///
/// A finished log is measured up to its `end_time` instead of `now`. The
/// result is never negative.
pub fn calculate_accumulated_duration(log: &ActivityLog, now: EpochMillis) -> i64 {
    let now = log.end_time.unwrap_or(now);
    let gross = now - log.start_time;
    (gross - pause_total(log, now)).max(0)
}
