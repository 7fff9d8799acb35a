//! Activity instance lifecycle
//!
//! Instances are day-scoped units of work. The service persists them through
//! the [`SessionStore`](crate::store::SessionStore) port; ordering and
//! day-filtering rules are pure functions in [`sorting`].

pub mod service;
pub mod sorting;

pub use service::InstanceService;
