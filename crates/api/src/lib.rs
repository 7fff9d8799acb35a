//! # Daybreak API
//!
//! Host-facing application layer.
//!
//! This crate contains:
//! - Commands (host → engine bridge) with timing and structured logging
//! - Application context (dependency injection)
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Commands take `&AppContext` so any host (desktop shell, CLI, tests) can
//!   call them directly

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
