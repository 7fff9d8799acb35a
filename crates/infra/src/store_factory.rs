//! Builds the configured `SessionStore` adapter.

use std::sync::Arc;

use daybreak_core::SessionStore;
use daybreak_domain::{Config, Result, StorageBackend};
use tracing::info;

use crate::database::{DbManager, SqliteSessionStore};
use crate::memory_store::MemorySessionStore;

/// Open the store selected by `config.storage`, running migrations for
/// SQLite.
pub fn build_store(config: &Config) -> Result<Arc<dyn SessionStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!(backend = %StorageBackend::Memory, "using in-memory session store");
            Ok(Arc::new(MemorySessionStore::new()))
        }
        StorageBackend::Sqlite => {
            let db = DbManager::new(&config.storage.path, config.storage.pool_size)?;
            db.run_migrations()?;
            info!(
                backend = %StorageBackend::Sqlite,
                db_path = %db.path().display(),
                "using sqlite session store"
            );
            Ok(Arc::new(SqliteSessionStore::new(Arc::new(db))))
        }
    }
}
