//! Logical-day boundary
//!
//! A logical day starts at a fixed local hour (04:00 by default) instead of
//! midnight, so late-night work stays attributed to the day it belongs to.

use std::sync::Arc;

use chrono::{DateTime, Duration, LocalResult, NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use daybreak_domain::constants::DEFAULT_DAY_BOUNDARY_HOUR;
use daybreak_domain::{ActivityInstance, DaybreakError, EpochMillis, Result};
use tracing::debug;

use super::clock::Clock;
use crate::instances::sorting::{filter_current_day, is_in_current_day};

/// Step used to walk out of a DST gap. Real-world gaps end on a quarter hour.
const GAP_STEP_MINUTES: i64 = 15;
const MAX_GAP_STEPS: i64 = 12;

/// Zone in which the boundary hour is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayZone {
    /// The process-local zone.
    Local,
    /// A named IANA zone.
    Named(Tz),
}

impl DayZone {
    /// Parse an optional IANA name; `None` means [`DayZone::Local`].
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name.map(str::trim) {
            None | Some("") => Ok(Self::Local),
            Some(name) => name.parse::<Tz>().map(Self::Named).map_err(|err| {
                DaybreakError::Config(format!("unknown time zone '{name}': {err}"))
            }),
        }
    }
}

/// Boundary of the logical day containing `now`.
///
/// When local time is at or after `boundary_hour` the boundary is today at
/// that hour, otherwise yesterday at that hour.
pub fn day_boundary_at(
    now: EpochMillis,
    zone: &DayZone,
    boundary_hour: u32,
) -> Result<EpochMillis> {
    match zone {
        DayZone::Local => boundary_in(&chrono::Local, now, boundary_hour),
        DayZone::Named(tz) => boundary_in(tz, now, boundary_hour),
    }
}

fn boundary_in<Z: TimeZone>(tz: &Z, now: EpochMillis, boundary_hour: u32) -> Result<EpochMillis> {
    let instant = DateTime::<Utc>::from_timestamp_millis(now)
        .ok_or_else(|| DaybreakError::InvalidInput(format!("timestamp out of range: {now}")))?;
    let local = instant.with_timezone(tz);

    let mut date = local.date_naive();
    if local.hour() < boundary_hour {
        date = date
            .pred_opt()
            .ok_or_else(|| DaybreakError::InvalidInput(format!("no day before {date}")))?;
    }

    let naive = date.and_hms_opt(boundary_hour, 0, 0).ok_or_else(|| {
        DaybreakError::InvalidInput(format!("invalid boundary hour: {boundary_hour}"))
    })?;

    resolve_local(tz, naive)
}

/// Map a local wall time to an instant. Ambiguous times take the earlier
/// instant; times inside a DST gap move to the end of the gap.
fn resolve_local<Z: TimeZone>(tz: &Z, naive: NaiveDateTime) -> Result<EpochMillis> {
    for step in 0..=MAX_GAP_STEPS {
        let candidate = naive + Duration::minutes(step * GAP_STEP_MINUTES);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return Ok(dt.timestamp_millis()),
            LocalResult::Ambiguous(earliest, _) => return Ok(earliest.timestamp_millis()),
            LocalResult::None => continue,
        }
    }
    Err(DaybreakError::Internal(format!("local time {naive} has no mapping")))
}

/// Classifies timestamps and instances into the current logical day.
pub struct DayBoundaryClassifier {
    clock: Arc<dyn Clock>,
    zone: DayZone,
    boundary_hour: u32,
}

impl DayBoundaryClassifier {
    /// Create a classifier. `boundary_hour` must be 0-23.
    pub fn new(clock: Arc<dyn Clock>, zone: DayZone, boundary_hour: u32) -> Result<Self> {
        if boundary_hour > 23 {
            return Err(DaybreakError::Config(format!(
                "day boundary hour must be 0-23, got {boundary_hour}"
            )));
        }
        Ok(Self { clock, zone, boundary_hour })
    }

    /// Classifier with the standard 04:00 boundary.
    pub fn with_default_boundary(clock: Arc<dyn Clock>, zone: DayZone) -> Self {
        Self { clock, zone, boundary_hour: DEFAULT_DAY_BOUNDARY_HOUR }
    }

    pub fn zone(&self) -> &DayZone {
        &self.zone
    }

    pub fn boundary_hour(&self) -> u32 {
        self.boundary_hour
    }

    /// Start of the current logical day, recomputed from the clock.
    pub fn current_day_boundary(&self) -> Result<EpochMillis> {
        day_boundary_at(self.clock.now_millis(), &self.zone, self.boundary_hour)
    }

    /// `timestamp >= current_day_boundary()`.
    pub fn is_current_day(&self, timestamp: EpochMillis) -> Result<bool> {
        Ok(timestamp >= self.current_day_boundary()?)
    }

    /// An instance belongs to today if it is incomplete or was completed
    /// since the boundary.
    pub fn includes_instance(&self, instance: &ActivityInstance) -> Result<bool> {
        Ok(is_in_current_day(instance, self.current_day_boundary()?))
    }

    /// Keep only today's instances, preserving order.
    pub fn current_day_instances(
        &self,
        instances: Vec<ActivityInstance>,
    ) -> Result<Vec<ActivityInstance>> {
        let boundary = self.current_day_boundary()?;
        let total = instances.len();
        let kept = filter_current_day(instances, boundary);
        debug!(boundary, total, kept = kept.len(), "filtered instances to current day");
        Ok(kept)
    }
}
