//! Domain types and models

pub mod activity;
pub mod instance;

pub use activity::{ActivityLog, PauseInterval, Session};
pub use instance::{ActivityInstance, Completion, InstanceUpdate, NewInstance};

/// Milliseconds since the Unix epoch. All persisted timestamps use this unit.
pub type EpochMillis = i64;

/// Generate a new time-ordered record identifier (UUIDv7).
pub fn new_record_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
