//! # Daybreak Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The SQLite session store (r2d2 pool over rusqlite)
//! - An in-memory session store
//! - Configuration loading from environment and files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements traits defined in `daybreak-core`
//! - Contains all "impure" code (I/O, environment, global subscribers)

pub mod config;
pub mod database;
pub mod errors;
pub mod memory_store;
pub mod observability;
pub mod store_factory;

// Re-export commonly used items
pub use database::{DbManager, SqliteSessionStore};
pub use errors::InfraError;
pub use memory_store::MemorySessionStore;
pub use observability::init_tracing;
pub use store_factory::build_store;
