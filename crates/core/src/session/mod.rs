//! Activity session lifecycle
//!
//! The engine owns the singleton live session; finished logs move to the
//! archive on `stop()`.

pub mod archive;
pub mod engine;

pub use archive::ActivityLogArchive;
pub use engine::ActivitySessionEngine;
