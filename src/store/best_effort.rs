//! Never-raises wrapper around [`CredentialStore`].
//!
//! Preserves the legacy contract of the request path: every storage failure
//! is recovered here, logged, and degraded to a no-op or an absent value.
//! Callers cannot distinguish "never set" from "storage failed" — a caller
//! that needs that distinction should use [`CredentialStore`] directly.

use crate::store::CredentialStore;

/// Credential store that swallows storage failures.
pub struct BestEffortStore {
    inner: CredentialStore,
}

impl BestEffortStore {
    pub fn new(inner: CredentialStore) -> Self {
        Self { inner }
    }

    /// The underlying explicit-result store.
    pub fn inner(&self) -> &CredentialStore {
        &self.inner
    }

    pub async fn set_access_token(&self, token: &str) {
        if let Err(e) = self.inner.set_access_token(token).await {
            tracing::warn!("Failed to store access token: {e}");
        }
    }

    /// Returns the stored access token, or `None` if never set or the
    /// backend failed.
    pub async fn get_access_token(&self) -> Option<String> {
        match self.inner.get_access_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read access token: {e}");
                None
            }
        }
    }

    pub async fn set_refresh_token(&self, token: &str) {
        if let Err(e) = self.inner.set_refresh_token(token).await {
            tracing::warn!("Failed to store refresh token: {e}");
        }
    }

    pub async fn get_refresh_token(&self) -> Option<String> {
        match self.inner.get_refresh_token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Failed to read refresh token: {e}");
                None
            }
        }
    }

    pub async fn store_auth_tokens(&self, access: &str, refresh: &str) {
        if let Err(e) = self.inner.store_auth_tokens(access, refresh).await {
            tracing::warn!("Failed to store auth tokens: {e}");
        }
    }

    pub async fn clear_tokens(&self) {
        if let Err(e) = self.inner.clear_tokens().await {
            tracing::warn!("Failed to clear tokens: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialError;
    use crate::port::{MemoryStorage, StoragePort};
    use async_trait::async_trait;
    use std::sync::Arc;

    /// Backend whose writes fail while reads see the durable state.
    struct FailingWrites {
        durable: MemoryStorage,
    }

    #[async_trait]
    impl StoragePort for FailingWrites {
        async fn get(&self, key: &str) -> Result<Option<String>, CredentialError> {
            self.durable.get(key).await
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("disk full".into()))
        }

        async fn multi_set(&self, _pairs: &[(&str, &str)]) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("disk full".into()))
        }

        async fn multi_remove(&self, _keys: &[&str]) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("disk full".into()))
        }
    }

    /// Backend that fails every operation.
    struct Unavailable;

    #[async_trait]
    impl StoragePort for Unavailable {
        async fn get(&self, _key: &str) -> Result<Option<String>, CredentialError> {
            Err(CredentialError::Storage("backend unavailable".into()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("backend unavailable".into()))
        }

        async fn multi_set(&self, _pairs: &[(&str, &str)]) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("backend unavailable".into()))
        }

        async fn multi_remove(&self, _keys: &[&str]) -> Result<(), CredentialError> {
            Err(CredentialError::Storage("backend unavailable".into()))
        }
    }

    #[tokio::test]
    async fn test_failed_write_degrades_to_absent() {
        let port = Arc::new(FailingWrites {
            durable: MemoryStorage::new(),
        });
        let store = BestEffortStore::new(CredentialStore::new(port));

        // Does not raise; nothing became durable
        store.set_access_token("tok-never-written").await;
        assert_eq!(store.get_access_token().await, None);
    }

    #[tokio::test]
    async fn test_failed_read_is_indistinguishable_from_absent() {
        let store = BestEffortStore::new(CredentialStore::new(Arc::new(Unavailable)));
        assert_eq!(store.get_access_token().await, None);
        assert_eq!(store.get_refresh_token().await, None);
    }

    #[tokio::test]
    async fn test_failed_bulk_operations_do_not_raise() {
        let store = BestEffortStore::new(CredentialStore::new(Arc::new(Unavailable)));
        store.store_auth_tokens("A1", "R1").await;
        store.clear_tokens().await;
    }

    #[tokio::test]
    async fn test_healthy_backend_behaves_like_inner_store() {
        let store = BestEffortStore::new(CredentialStore::new(Arc::new(MemoryStorage::new())));
        store.store_auth_tokens("A1", "R1").await;
        assert_eq!(store.get_access_token().await, Some("A1".into()));
        assert_eq!(store.get_refresh_token().await, Some("R1".into()));

        store.clear_tokens().await;
        assert_eq!(store.get_access_token().await, None);
        assert_eq!(store.get_refresh_token().await, None);
    }
}
