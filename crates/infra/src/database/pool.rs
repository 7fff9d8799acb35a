//! SQLite connection pool
//!
//! r2d2 pool over rusqlite with per-connection pragmas applied on checkout
//! of every new physical connection.

use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{instrument, warn};

/// Pooled SQLite connection.
pub type SqliteConnection = PooledConnection<SqliteConnectionManager>;

/// Shared r2d2 pool type.
pub type SqlitePool = Pool<SqliteConnectionManager>;

/// Errors raised while building the pool or preparing connections.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("failed to create connection pool: {0}")]
    Build(String),

    #[error("failed to apply connection pragmas: {0}")]
    Pragma(String),

    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

pub type PoolResult<T> = Result<T, PoolError>;

/// Pool tuning knobs.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_size: u32,
    pub connection_timeout: Duration,
    pub busy_timeout: Duration,
    pub enable_wal: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_size: 4,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_secs(5),
            enable_wal: true,
        }
    }
}

/// Apply connection-level pragmas
///
/// - busy timeout for lock contention
/// - WAL journal with automatic checkpoints (when enabled)
/// - NORMAL synchronous mode
pub fn apply_connection_pragmas(conn: &Connection, config: &PoolConfig) -> PoolResult<()> {
    let mut pragma_sql = String::new();

    if config.enable_wal {
        pragma_sql.push_str("PRAGMA journal_mode=WAL;\n");
        pragma_sql.push_str("PRAGMA wal_autocheckpoint=1000;\n");
    }
    pragma_sql.push_str("PRAGMA synchronous=NORMAL;\n");

    // must precede the journal switch, which contends with sibling connections
    conn.busy_timeout(config.busy_timeout).map_err(|e| PoolError::Pragma(e.to_string()))?;
    conn.execute_batch(&pragma_sql).map_err(|e| PoolError::Pragma(e.to_string()))?;
    Ok(())
}

/// Build a pool for the database file at `path`.
#[instrument(skip(config), fields(db_path = ?path, pool_size = config.max_size))]
pub fn create_pool(path: &Path, config: PoolConfig) -> PoolResult<SqlitePool> {
    let pragma_config = config.clone();
    let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
        apply_connection_pragmas(conn, &pragma_config)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    });

    Pool::builder()
        .max_size(config.max_size.max(1))
        .connection_timeout(config.connection_timeout)
        .build(manager)
        .map_err(|e| {
            warn!(error = %e, "failed to create connection pool");
            PoolError::Build(e.to_string())
        })
}
