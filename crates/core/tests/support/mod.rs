//! Shared test helpers for `daybreak-core` integration tests.
//!
//! These helpers provide an in-memory store mock and fixture builders so the
//! engine and instance tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod store;

use std::sync::Arc;

use chrono::{NaiveDate, TimeZone};
use chrono_tz::Tz;
use daybreak_core::{
    ActivitySessionEngine, Clock, DayBoundaryClassifier, DayZone, InstanceService, ManualClock,
};
use daybreak_domain::EpochMillis;

pub use self::store::MockSessionStore;

/// Zone used by every date-sensitive test.
pub const TEST_ZONE: Tz = chrono_tz::Europe::Berlin;

/// Epoch millis for a wall-clock time in [`TEST_ZONE`].
pub fn local_millis(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> EpochMillis {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("valid wall-clock time");
    TEST_ZONE
        .from_local_datetime(&naive)
        .single()
        .expect("unambiguous wall-clock time")
        .timestamp_millis()
}

/// Engine wired to a fresh mock store and a manual clock.
pub struct EngineFixture {
    pub store: Arc<MockSessionStore>,
    pub clock: Arc<ManualClock>,
    pub engine: ActivitySessionEngine,
}

pub fn engine_fixture(start: EpochMillis) -> EngineFixture {
    let store = Arc::new(MockSessionStore::new());
    let clock = Arc::new(ManualClock::new(start));
    let engine = ActivitySessionEngine::new(store.clone(), clock.clone() as Arc<dyn Clock>);
    EngineFixture { store, clock, engine }
}

/// Instance service wired to a fresh mock store, a manual clock and a
/// 04:00 boundary in [`TEST_ZONE`].
pub struct InstanceFixture {
    pub store: Arc<MockSessionStore>,
    pub clock: Arc<ManualClock>,
    pub service: InstanceService,
}

pub fn instance_fixture(start: EpochMillis) -> InstanceFixture {
    let store = Arc::new(MockSessionStore::new());
    let clock = Arc::new(ManualClock::new(start));
    let classifier = Arc::new(DayBoundaryClassifier::with_default_boundary(
        clock.clone(),
        DayZone::Named(TEST_ZONE),
    ));
    let service = InstanceService::new(store.clone(), clock.clone(), classifier);
    InstanceFixture { store, clock, service }
}
