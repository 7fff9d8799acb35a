//! In-process session store
//!
//! Keeps every record in a `HashMap` behind a lock. Nothing survives the
//! process; useful for tests and ephemeral hosts.

use std::collections::HashMap;

use async_trait::async_trait;
use daybreak_core::SessionStore;
use daybreak_domain::Result as DomainResult;
use parking_lot::RwLock;
use serde_json::Value;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<(String, String), Value>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, namespace: &str, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.entries.read().get(&(namespace.to_string(), key.to_string())).cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> DomainResult<()> {
        self.entries.write().insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> DomainResult<()> {
        self.entries.write().remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }
}
