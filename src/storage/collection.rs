use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use super::key_value::KeyValueStore;

pub const TASKS_KEY: &str = "tasks";
pub const ARCHIVED_TASKS_KEY: &str = "archivedTasks";
pub const NOTES_KEY: &str = "notes";

/// Reads a JSON list stored under `key`. A missing key and a blob that doesn't parse both give
/// an empty list; the latter is only logged so the rest of the application stays usable.
pub fn load_collection<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Vec<T>> {
    let Some(bytes) = store.load(key)? else {
        return Ok(vec![]);
    };
    Ok(parse_collection(key, &bytes).unwrap_or_default())
}

/// Same as [load_collection] for callers that are going to save under `key`. A value that
/// doesn't parse is copied to [backup_key] first, since the next save replaces it.
pub fn load_collection_for_update<T: DeserializeOwned>(
    store: &impl KeyValueStore,
    key: &str,
) -> Result<Vec<T>> {
    let Some(bytes) = store.load(key)? else {
        return Ok(vec![]);
    };
    match parse_collection(key, &bytes) {
        Some(items) => Ok(items),
        None => {
            let backup = backup_key(key);
            warn!("Keeping the corrupted value of {key} under {backup}");
            store.save(&backup, &bytes)?;
            Ok(vec![])
        }
    }
}

fn parse_collection<T: DeserializeOwned>(key: &str, bytes: &[u8]) -> Option<Vec<T>> {
    serde_json::from_slice::<Vec<T>>(bytes)
        .inspect_err(|e| {
            warn!(
                "Stored value under {key} is corrupted, treating it as empty: {e}. Value {}",
                String::from_utf8_lossy(bytes)
            )
        })
        .ok()
}

pub fn backup_key(key: &str) -> String {
    format!("{key}.bak")
}

/// Writes the whole list under `key`. There are no partial updates.
pub fn save_collection<T: Serialize>(
    store: &impl KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<()> {
    let bytes = serde_json::to_vec(items)?;
    store.save(key, &bytes)
}
