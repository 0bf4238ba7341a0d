use std::{
    collections::HashMap,
    ops::Deref,
    path::PathBuf,
    sync::{Mutex, PoisonError},
};

use anyhow::Result;
use tracing::debug;

use crate::fs::operations::{read_locked, write_locked};

/// Interface for abstracting storage of blobs. Every component receives one instead of reaching
/// for a global store.
pub trait KeyValueStore {
    /// Returns the blob stored under `key`, or `None` if nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    fn save(&self, key: &str, value: &[u8]) -> Result<()>;
}

impl<T: Deref> KeyValueStore for T
where
    T::Target: KeyValueStore,
{
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.deref().load(key)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        self.deref().save(key, value)
    }
}

/// The main realization of [KeyValueStore]. Each key is a `<key>.json` file in `store_dir`.
pub struct FileStore {
    store_dir: PathBuf,
}

impl FileStore {
    pub fn new(store_dir: PathBuf) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(&store_dir)?;

        Ok(Self { store_dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.store_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.key_path(key);
        debug!("Loading {path:?}");
        Ok(read_locked(&path)?)
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_path(key);
        debug!("Saving {} bytes into {path:?}", value.len());
        Ok(write_locked(&path, value)?)
    }
}

/// Store living only in memory. Handy for tests and for running without a data directory.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn with_entry(self, key: &str, value: impl Into<Vec<u8>>) -> Self {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_vec());
        Ok(())
    }
}
