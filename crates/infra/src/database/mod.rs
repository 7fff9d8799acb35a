//! Database implementations

pub mod manager;
pub mod pool;
pub mod sqlite_store;

pub use manager::DbManager;
pub use pool::{PoolConfig, PoolError};
pub use sqlite_store::SqliteSessionStore;
