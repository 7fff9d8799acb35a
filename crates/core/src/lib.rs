//! # Daybreak Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the key-value store and the clock
//! - The activity session engine and its log archive
//! - Duration and logical-day calculations
//! - Activity instance lifecycle and ordering rules
//!
//! ## Architecture Principles
//! - Only depends on `daybreak-domain`
//! - No database, filesystem, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod instances;
pub mod session;
pub mod store;
pub mod time;

// Re-export specific items to avoid ambiguity
pub use instances::sorting::{get_sorted_instances, is_in_current_day};
pub use instances::InstanceService;
pub use session::{ActivityLogArchive, ActivitySessionEngine};
pub use store::ports::SessionStore;
pub use time::clock::{Clock, ManualClock, SystemClock};
pub use time::day_boundary::{DayBoundaryClassifier, DayZone};
pub use time::duration::calculate_accumulated_duration;
