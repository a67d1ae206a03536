//! File-backed JSON key-value store.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StorageError};

/// A local key-value store: one JSON object in one file.
///
/// A missing file reads as an empty store; absent keys are `None`, not
/// errors. Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct KvStore {
    path: PathBuf,
    entries: serde_json::Map<String, serde_json::Value>,
}

impl KvStore {
    /// Open the store at an explicit path, creating in-memory state from
    /// the file if it exists.
    ///
    /// # Errors
    /// Returns an error if the file exists but is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|e| StorageError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?
            }
            Err(_) => serde_json::Map::new(),
        };
        Ok(Self { path, entries })
    }

    /// Open the store in the default data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(super::data_dir()?.join("store.json"))
    }

    /// Read and decode the value under `key`; `None` if absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Store a value under `key`, overwriting any previous value, and
    /// flush to disk.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.entries
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()
    }

    /// Drop the value under `key`, if any, and flush to disk.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        self.flush()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn flush(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::SaveFailed {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}
