//! # Daybreak Domain
//!
//! Business domain types and models for Daybreak.
//!
//! This crate contains:
//! - Domain data types (ActivityLog, Session, ActivityInstance, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Storage namespace constants
//!
//! ## Architecture
//! - No dependencies on other Daybreak crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::format::format_elapsed;
