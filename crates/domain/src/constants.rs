//! Application constants
//!
//! Centralized location for storage namespaces and day-boundary defaults.

// Storage namespaces
pub const SESSION_NAMESPACE: &str = "activity-session";
pub const SESSION_KEY: &str = "current";
pub const ACTIVITY_LOG_NAMESPACE: &str = "activity-log";
pub const ACTIVITY_LOG_INDEX_NAMESPACE: &str = "activity-logs";
pub const ACTIVITY_INSTANCE_NAMESPACE: &str = "activity-instance";
pub const ACTIVITY_INSTANCE_INDEX_NAMESPACE: &str = "activity-instances";
pub const ALL_INDEX_KEY: &str = "all";

// Logical day
pub const DEFAULT_DAY_BOUNDARY_HOUR: u32 = 4;
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

// Configuration defaults
pub const DEFAULT_DB_PATH: &str = "daybreak.db";
pub const DEFAULT_POOL_SIZE: u32 = 4;
pub const DEFAULT_LOG_FILTER: &str = "info";
