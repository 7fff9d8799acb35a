//! SQLite-backed session store.
//!
//! Implements the `SessionStore` port over a single `kv_store` table keyed by
//! `(namespace, key)`. Values are stored as JSON text. All database
//! operations run in `spawn_blocking` to avoid blocking the async runtime.

use std::sync::Arc;

use async_trait::async_trait;
use daybreak_core::SessionStore;
use daybreak_domain::Result as DomainResult;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use tokio::task;
use tracing::debug;

use super::manager::{map_sql_error, DbManager};
use crate::errors::map_join_error;

/// SQLite-backed key-value store for session records.
pub struct SqliteSessionStore {
    db: Arc<DbManager>,
}

impl SqliteSessionStore {
    /// Create a store over an already migrated database.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    /// Keys present in `namespace`, sorted.
    pub async fn keys(&self, namespace: &str) -> DomainResult<Vec<String>> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();

        task::spawn_blocking(move || -> DomainResult<Vec<String>> {
            let conn = db.get_connection()?;
            query_keys(&conn, &namespace)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, namespace: &str, key: &str) -> DomainResult<Option<Value>> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<Option<Value>> {
            let conn = db.get_connection()?;
            query_value(&conn, &namespace, &key)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();
        let key = key.to_string();
        let text = serde_json::to_string(&value)?;

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            upsert_value(&conn, &namespace, &key, &text)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn remove(&self, namespace: &str, key: &str) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let namespace = namespace.to_string();
        let key = key.to_string();

        task::spawn_blocking(move || -> DomainResult<()> {
            let conn = db.get_connection()?;
            delete_value(&conn, &namespace, &key)
        })
        .await
        .map_err(map_join_error)?
    }
}

// ============================================================================
// Synchronous SQL Operations (called inside spawn_blocking)
// ============================================================================

fn query_value(conn: &Connection, namespace: &str, key: &str) -> DomainResult<Option<Value>> {
    let text: Option<String> = conn
        .query_row(
            "SELECT value FROM kv_store WHERE namespace = ?1 AND key = ?2",
            params![namespace, key],
            |row| row.get(0),
        )
        .optional()
        .map_err(map_sql_error)?;

    match text {
        Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        None => Ok(None),
    }
}

fn upsert_value(conn: &Connection, namespace: &str, key: &str, text: &str) -> DomainResult<()> {
    let now = chrono::Utc::now().timestamp_millis();
    conn.execute(
        "INSERT INTO kv_store (namespace, key, value, updated_at) VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(namespace, key)
         DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![namespace, key, text, now],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

fn delete_value(conn: &Connection, namespace: &str, key: &str) -> DomainResult<()> {
    let removed = conn
        .execute("DELETE FROM kv_store WHERE namespace = ?1 AND key = ?2", params![namespace, key])
        .map_err(map_sql_error)?;
    debug!(namespace, key, removed, "kv entry removed");
    Ok(())
}

fn query_keys(conn: &Connection, namespace: &str) -> DomainResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT key FROM kv_store WHERE namespace = ?1 ORDER BY key")
        .map_err(map_sql_error)?;
    let rows = stmt.query_map(params![namespace], |row| row.get(0)).map_err(map_sql_error)?;
    rows.collect::<Result<Vec<String>, _>>().map_err(map_sql_error)
}
