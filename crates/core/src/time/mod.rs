//! Time sources and temporal arithmetic
//!
//! Nothing here ticks on its own: every value is recomputed from stored
//! timestamps and the injected [`clock::Clock`] when asked.

pub mod clock;
pub mod day_boundary;
pub mod duration;
