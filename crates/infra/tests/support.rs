//! Shared helpers for infra integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use daybreak_infra::database::{DbManager, SqliteSessionStore};
use tempfile::TempDir;

/// Temporary database that keeps its directory alive for the duration of a
/// test.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    temp_dir: TempDir,
}

impl TestDatabase {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let manager = Self::open(&temp_dir);
        Self { manager, temp_dir }
    }

    /// A second manager over the same file, as after a restart.
    pub fn reopen(&self) -> Arc<DbManager> {
        Self::open(&self.temp_dir)
    }

    pub fn store(&self) -> SqliteSessionStore {
        SqliteSessionStore::new(Arc::clone(&self.manager))
    }

    fn open(temp_dir: &TempDir) -> Arc<DbManager> {
        let manager = DbManager::new(temp_dir.path().join("daybreak.db"), 2)
            .expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");
        Arc::new(manager)
    }
}
