//! SettingsStore trait: the abstract interface for settings persistence.
//!
//! This trait keeps the gate storage-agnostic. Implementations include
//! SQLite (primary) and in-memory (for tests).

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// The SettingsStore trait: async interface for keyed JSON settings.
///
/// All methods are async to support both sync (SQLite) and async backends.
/// For SQLite, we use `spawn_blocking` internally to avoid blocking the runtime.
///
/// # Design Notes
///
/// - **Whole-value writes**: `write` replaces the stored blob for a key.
/// - **Change reporting**: `write` returns `Ok(false)` when the store
///   already held exactly this value. Callers that must distinguish a
///   failed write from a no-op re-read the key and compare.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Store `value` under `key`, replacing any existing value.
    ///
    /// Returns `Ok(true)` if the stored value changed, `Ok(false)` if the
    /// key already held exactly this value.
    async fn write(&self, key: &str, value: &Value) -> Result<bool>;

    /// Remove the value stored under `key`.
    ///
    /// Returns `Ok(true)` if a value was removed.
    async fn delete(&self, key: &str) -> Result<bool>;
}

#[async_trait]
impl<S: SettingsStore + ?Sized> SettingsStore for std::sync::Arc<S> {
    async fn read(&self, key: &str) -> Result<Option<Value>> {
        (**self).read(key).await
    }

    async fn write(&self, key: &str, value: &Value) -> Result<bool> {
        (**self).write(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        (**self).delete(key).await
    }
}
