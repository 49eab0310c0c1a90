//! Key-value persistence abstraction and the settings facade.
//!
//! # Design
//! - `KeyValueStore` models the host's generic key-value configuration
//!   facility; backends only move opaque strings.
//! - `SettingsService` owns the merge semantics. A missing record is a valid
//!   state, never a fault.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::error::{SettingsError, SettingsResult};
use crate::model::{Settings, SettingsPatch};

/// Storage key for the singleton settings record.
pub const SETTINGS_KEY: &str = "copykit-settings";

/// Abstraction over key-value backends used for settings persistence.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any.
    async fn get(&self, key: &str) -> SettingsResult<Option<String>>;
    /// Store `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> SettingsResult<()>;
}

/// Shared reference to a key-value backend.
pub type SharedKeyValueStore = Arc<dyn KeyValueStore>;

/// Typed reads and merge-writes over a key-value backend.
#[derive(Clone)]
pub struct SettingsService {
    store: SharedKeyValueStore,
}

impl SettingsService {
    /// Wrap a key-value backend.
    #[must_use]
    pub fn new(store: SharedKeyValueStore) -> Self {
        Self { store }
    }

    /// Fetch the current settings record, merging stored fields under the
    /// defaults. Absent or unreadable storage degrades to the default record.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    pub async fn get(&self) -> SettingsResult<Settings> {
        let Some(raw) = self.store.get(SETTINGS_KEY).await? else {
            return Ok(Settings::default());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(stored) => Ok(Settings::from_stored(&stored)),
            Err(err) => {
                warn!(
                    error = %err,
                    key = SETTINGS_KEY,
                    "stored settings were not valid JSON; using defaults"
                );
                Ok(Settings::default())
            }
        }
    }

    /// Merge `patch` over `current` and persist the resulting full record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    pub async fn set(
        &self,
        patch: &SettingsPatch,
        current: &Settings,
    ) -> SettingsResult<Settings> {
        let merged = current.apply(patch);
        let raw = serde_json::to_string(&merged)
            .map_err(|err| SettingsError::Serialize { source: err })?;
        self.store.put(SETTINGS_KEY, &raw).await?;
        Ok(merged)
    }
}

/// In-process backend for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> SettingsResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_SELECTOR;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[tokio::test]
    async fn get_on_empty_storage_returns_defaults() {
        let service = service();
        let settings = service.get().await.expect("read settings");
        assert_eq!(settings.selector, DEFAULT_SELECTOR);
    }

    #[tokio::test]
    async fn get_is_idempotent_without_intervening_set() {
        let service = service();
        let first = service.get().await.expect("first read");
        let second = service.get().await.expect("second read");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let service = service();
        let current = service.get().await.expect("read settings");
        service
            .set(&SettingsPatch::with_selector("div.code"), &current)
            .await
            .expect("write settings");
        let settings = service.get().await.expect("read back");
        assert_eq!(settings.selector, "div.code");
    }

    #[tokio::test]
    async fn empty_patch_preserves_stored_values() {
        let service = service();
        let current = service.get().await.expect("read settings");
        let stored = service
            .set(&SettingsPatch::with_selector(".highlight"), &current)
            .await
            .expect("write settings");
        service
            .set(&SettingsPatch::default(), &stored)
            .await
            .expect("write empty patch");
        let settings = service.get().await.expect("read back");
        assert_eq!(settings.selector, ".highlight");
    }

    #[tokio::test]
    async fn corrupt_stored_record_degrades_to_defaults() {
        let store = Arc::new(MemoryKeyValueStore::new());
        store
            .put(SETTINGS_KEY, "not-json")
            .await
            .expect("seed corrupt value");
        let service = SettingsService::new(store);
        let settings = service.get().await.expect("read settings");
        assert_eq!(settings.selector, DEFAULT_SELECTOR);
    }
}
