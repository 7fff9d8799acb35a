use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use daybreak_core::SessionStore;
use daybreak_domain::{DaybreakError, Result as DomainResult};
use serde_json::Value;

/// In-memory mock for `SessionStore`.
///
/// Records every write and can be told to fail writes, which lets tests
/// check that storage errors propagate and leave prior state intact.
#[derive(Default)]
pub struct MockSessionStore {
    entries: Mutex<HashMap<(String, String), Value>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set`/`remove` fail until reset.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set` and `remove` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, namespace: &str, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(&(namespace.to_string(), key.to_string())).cloned()
    }

    /// Seed a raw value, bypassing the trait.
    pub fn seed(&self, namespace: &str, key: &str, value: Value) {
        self.entries.lock().unwrap().insert((namespace.to_string(), key.to_string()), value);
    }

    fn check_writable(&self) -> DomainResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DaybreakError::Storage("simulated write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn get(&self, namespace: &str, key: &str) -> DomainResult<Option<Value>> {
        Ok(self.raw(namespace, key))
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> DomainResult<()> {
        self.check_writable()?;
        self.entries.lock().unwrap().insert((namespace.to_string(), key.to_string()), value);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, namespace: &str, key: &str) -> DomainResult<()> {
        self.check_writable()?;
        self.entries.lock().unwrap().remove(&(namespace.to_string(), key.to_string()));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
