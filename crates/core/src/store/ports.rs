//! Port interface for the namespaced key-value store
//!
//! This trait defines the boundary between core business logic and the
//! storage adapters in `daybreak-infra`.

use async_trait::async_trait;
use daybreak_domain::Result;
use serde_json::Value;

/// Async namespaced key-value store.
///
/// Every `set` replaces the full value under `(namespace, key)`. Errors are
/// returned as-is to callers; the core never retries.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `(namespace, key)`, if any.
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>>;

    /// Replace the value stored under `(namespace, key)`.
    async fn set(&self, namespace: &str, key: &str, value: Value) -> Result<()>;

    /// Delete `(namespace, key)`. Removing a missing key is not an error.
    async fn remove(&self, namespace: &str, key: &str) -> Result<()>;
}
