//! Key-value store port and typed record helpers

pub mod ports;
pub mod records;

pub use ports::SessionStore;
