//! Activity log and session types
//!
//! Persisted verbatim as JSON under the `activity-session` and `activity-log`
//! namespaces, so field names stay camelCase.

use serde::{Deserialize, Serialize};

use super::{new_record_id, EpochMillis};

/// One suspension window inside an activity log.
///
/// Only the trailing interval of a live log may be `Open`. An `Open` interval
/// is written without `resumedAt`; a stored `resumedAt: null` also reads back
/// as `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PauseInterval {
    Closed {
        #[serde(rename = "pausedAt")]
        paused_at: EpochMillis,
        #[serde(rename = "resumedAt")]
        resumed_at: EpochMillis,
    },
    Open {
        #[serde(rename = "pausedAt")]
        paused_at: EpochMillis,
    },
}

impl PauseInterval {
    pub fn paused_at(&self) -> EpochMillis {
        match *self {
            Self::Open { paused_at } | Self::Closed { paused_at, .. } => paused_at,
        }
    }

    pub fn resumed_at(&self) -> Option<EpochMillis> {
        match *self {
            Self::Open { .. } => None,
            Self::Closed { resumed_at, .. } => Some(resumed_at),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Close the interval at `resumed_at`. Closed intervals are returned as-is.
    #[must_use]
    pub fn close(self, resumed_at: EpochMillis) -> Self {
        match self {
            Self::Open { paused_at } => Self::Closed { paused_at, resumed_at },
            closed @ Self::Closed { .. } => closed,
        }
    }

    /// Length of the pause, treating an open interval as lasting until `now`.
    ///
    /// Never negative.
    pub fn span(&self, now: EpochMillis) -> i64 {
        let end = self.resumed_at().unwrap_or(now);
        (end - self.paused_at()).max(0)
    }
}

/// One timed session against an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub activity_id: String,
    pub start_time: EpochMillis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<EpochMillis>,
    /// Net duration in ms. Zero until `end_time` is set.
    #[serde(default)]
    pub duration: i64,
    #[serde(default)]
    pub pause_intervals: Vec<PauseInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ActivityLog {
    /// Fresh running log for `activity_id` starting at `now`.
    pub fn start(activity_id: impl Into<String>, now: EpochMillis) -> Self {
        Self {
            id: new_record_id(),
            activity_id: activity_id.into(),
            start_time: now,
            end_time: None,
            duration: 0,
            pause_intervals: Vec::new(),
            notes: None,
        }
    }

    /// True when the trailing pause interval is open.
    pub fn is_paused(&self) -> bool {
        self.pause_intervals.last().is_some_and(PauseInterval::is_open)
    }

    pub fn is_finished(&self) -> bool {
        self.end_time.is_some()
    }

    /// Append an open interval. Returns `false` when already paused.
    pub fn open_pause(&mut self, now: EpochMillis) -> bool {
        if self.is_paused() {
            return false;
        }
        self.pause_intervals.push(PauseInterval::Open { paused_at: now });
        true
    }

    /// Close the trailing open interval. Returns `false` when not paused.
    pub fn close_pause(&mut self, now: EpochMillis) -> bool {
        match self.pause_intervals.last_mut() {
            Some(last) if last.is_open() => {
                *last = last.close(now);
                true
            }
            _ => false,
        }
    }

    /// Duration as recorded: zero for a live log.
    pub fn recorded_duration(&self) -> i64 {
        if self.is_finished() {
            self.duration
        } else {
            0
        }
    }
}

/// The single live time-tracking record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub current_log: ActivityLog,
    pub is_paused: bool,
    /// LIFO history of suspended logs; the tail is the default resume target.
    #[serde(default)]
    pub paused_activity_stack: Vec<ActivityLog>,
}

impl Session {
    /// Session whose current log is running with the given stack.
    pub fn running(current_log: ActivityLog, paused_activity_stack: Vec<ActivityLog>) -> Self {
        Self { current_log, is_paused: false, paused_activity_stack }
    }

    /// `is_paused` agrees with the current log's trailing interval.
    pub fn is_consistent(&self) -> bool {
        self.is_paused == self.current_log.is_paused()
    }

    pub fn stack_len(&self) -> usize {
        self.paused_activity_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn log_with(intervals: Vec<PauseInterval>) -> ActivityLog {
        ActivityLog {
            id: "log-1".into(),
            activity_id: "focus".into(),
            start_time: 1_000,
            end_time: None,
            duration: 0,
            pause_intervals: intervals,
            notes: None,
        }
    }

    #[test]
    fn open_interval_omits_resumed_at() {
        let value = serde_json::to_value(PauseInterval::Open { paused_at: 5 }).unwrap();
        assert_eq!(value, json!({ "pausedAt": 5 }));
    }

    #[test]
    fn null_resumed_at_reads_as_open() {
        let interval: PauseInterval =
            serde_json::from_value(json!({ "pausedAt": 5, "resumedAt": null })).unwrap();
        assert_eq!(interval, PauseInterval::Open { paused_at: 5 });

        let closed: PauseInterval =
            serde_json::from_value(json!({ "pausedAt": 5, "resumedAt": 9 })).unwrap();
        assert_eq!(closed, PauseInterval::Closed { paused_at: 5, resumed_at: 9 });
    }

    #[test]
    fn span_clamps_negative_and_uses_now_for_open() {
        assert_eq!(PauseInterval::Closed { paused_at: 10, resumed_at: 4 }.span(100), 0);
        assert_eq!(PauseInterval::Open { paused_at: 40 }.span(100), 60);
    }

    #[test]
    fn open_and_close_pause_are_idempotent() {
        let mut log = log_with(Vec::new());
        assert!(log.open_pause(2_000));
        assert!(!log.open_pause(2_500));
        assert!(log.is_paused());
        assert!(log.close_pause(3_000));
        assert!(!log.close_pause(3_500));
        assert_eq!(
            log.pause_intervals,
            vec![PauseInterval::Closed { paused_at: 2_000, resumed_at: 3_000 }]
        );
    }

    #[test]
    fn session_wire_shape_is_camel_case() {
        let session = Session::running(log_with(vec![]), vec![]);
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(
            value,
            json!({
                "currentLog": {
                    "id": "log-1",
                    "activityId": "focus",
                    "startTime": 1000,
                    "duration": 0,
                    "pauseIntervals": []
                },
                "isPaused": false,
                "pausedActivityStack": []
            })
        );
    }

    #[test]
    fn live_log_reports_zero_recorded_duration() {
        let mut log = log_with(vec![]);
        log.duration = 500;
        assert_eq!(log.recorded_duration(), 0);
        log.end_time = Some(9_000);
        assert_eq!(log.recorded_duration(), 500);
    }
}
