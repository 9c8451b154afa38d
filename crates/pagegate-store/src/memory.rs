//! In-memory implementation of the SettingsStore trait.
//!
//! This is primarily for testing. It has the same semantics as SQLite
//! but keeps everything in memory with no persistence.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::traits::SettingsStore;

/// In-memory settings store.
///
/// All data is lost when the store is dropped. Thread-safe via RwLock.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &Value) -> Result<bool> {
        let mut entries = self.entries.write().unwrap();

        if entries.get(key) == Some(value) {
            return Ok(false);
        }

        entries.insert(key.to_string(), value.clone());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut entries = self.entries.write().unwrap();
        Ok(entries.remove(key).is_some())
    }
}
