//! OS keychain storage backend (Secret Service, macOS Keychain, Windows
//! Credential Manager).
//!
//! Keychain APIs are blocking, so every call runs under `spawn_blocking`.
//! OS keychains expose no batch primitive; `multi_set` / `multi_remove`
//! apply per entry sequentially, so a racing reader can observe a
//! half-applied batch.

use async_trait::async_trait;

use crate::error::CredentialError;
use crate::port::StoragePort;

/// Key-value store filed under one keychain service name, one entry per key.
pub struct KeyringStorage {
    service: String,
}

impl KeyringStorage {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(service: &str, key: &str) -> Result<keyring::Entry, CredentialError> {
        keyring::Entry::new(service, key)
            .map_err(|e| CredentialError::Storage(format!("Failed to open keychain entry: {e}")))
    }

    async fn run_blocking<T, F>(&self, op: F) -> Result<T, CredentialError>
    where
        T: Send + 'static,
        F: FnOnce(String) -> Result<T, CredentialError> + Send + 'static,
    {
        let service = self.service.clone();
        tokio::task::spawn_blocking(move || op(service))
            .await
            .map_err(|e| CredentialError::Storage(format!("Keychain task failed: {e}")))?
    }
}

#[async_trait]
impl StoragePort for KeyringStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
        let key = key.to_string();
        self.run_blocking(move |service| {
            match Self::entry(&service, &key)?.get_password() {
                Ok(value) => Ok(Some(value)),
                Err(keyring::Error::NoEntry) => Ok(None),
                Err(e) => Err(CredentialError::Storage(format!(
                    "Failed to read keychain entry: {e}"
                ))),
            }
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CredentialError> {
        let key = key.to_string();
        let value = value.to_string();
        self.run_blocking(move |service| {
            Self::entry(&service, &key)?.set_password(&value).map_err(|e| {
                CredentialError::Storage(format!("Failed to write keychain entry: {e}"))
            })
        })
        .await
    }

    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<(), CredentialError> {
        for (key, value) in pairs {
            self.set(key, value).await?;
        }
        Ok(())
    }

    async fn multi_remove(&self, keys: &[&str]) -> Result<(), CredentialError> {
        for key in keys {
            let key = key.to_string();
            self.run_blocking(move |service| {
                match Self::entry(&service, &key)?.delete_password() {
                    Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
                    Err(e) => Err(CredentialError::Storage(format!(
                        "Failed to delete keychain entry: {e}"
                    ))),
                }
            })
            .await?;
        }
        Ok(())
    }
}
