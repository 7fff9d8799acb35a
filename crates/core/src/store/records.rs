//! Typed helpers over [`SessionStore`]
//!
//! Records are serialized with `serde_json`; id-lists are stored as plain
//! JSON arrays of strings.

use daybreak_domain::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::ports::SessionStore;

/// Read and decode a record.
pub async fn get_record<T: DeserializeOwned>(
    store: &dyn SessionStore,
    namespace: &str,
    key: &str,
) -> Result<Option<T>> {
    match store.get(namespace, key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Encode and write a record in a single `set`.
pub async fn put_record<T: Serialize + Sync>(
    store: &dyn SessionStore,
    namespace: &str,
    key: &str,
    record: &T,
) -> Result<()> {
    let value = serde_json::to_value(record)?;
    store.set(namespace, key, value).await
}

/// Read an id-list; a missing list is empty.
pub async fn get_id_list(
    store: &dyn SessionStore,
    namespace: &str,
    key: &str,
) -> Result<Vec<String>> {
    Ok(get_record::<Vec<String>>(store, namespace, key).await?.unwrap_or_default())
}

/// Append `id` to an id-list unless already present.
pub async fn append_to_id_list(
    store: &dyn SessionStore,
    namespace: &str,
    key: &str,
    id: &str,
) -> Result<()> {
    let mut ids = get_id_list(store, namespace, key).await?;
    if ids.iter().any(|existing| existing == id) {
        return Ok(());
    }
    ids.push(id.to_string());
    put_record(store, namespace, key, &ids).await
}

/// Remove `id` from an id-list. Returns whether it was present.
pub async fn remove_from_id_list(
    store: &dyn SessionStore,
    namespace: &str,
    key: &str,
    id: &str,
) -> Result<bool> {
    let mut ids = get_id_list(store, namespace, key).await?;
    let before = ids.len();
    ids.retain(|existing| existing != id);
    if ids.len() == before {
        return Ok(false);
    }
    put_record(store, namespace, key, &ids).await?;
    Ok(true)
}
