//! In-memory storage backend.
//!
//! Holds values in a map behind an async mutex. Batch operations apply under
//! a single guard, so a concurrent reader never observes a half-applied
//! batch. Nothing survives process exit.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::CredentialError;
use crate::port::StoragePort;

/// Volatile map-backed store. The substitutable fake for tests, and the
/// `memory` backend for ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoragePort for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<(), CredentialError> {
        let mut entries = self.entries.lock().await;
        for (key, value) in pairs {
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), CredentialError> {
        let mut entries = self.entries.lock().await;
        for key in keys {
            entries.remove(*key);
        }
        Ok(())
    }
}
