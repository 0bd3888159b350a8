//! Storage port — the injected persistence capability.
//!
//! Call sites depend on this trait rather than on a concrete platform store,
//! so a backend can be swapped (or faked in tests) without touching the
//! credential facade.

pub mod memory;
pub mod sqlite;

#[cfg(feature = "keyring")]
pub mod keyring;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

#[cfg(feature = "keyring")]
pub use self::keyring::KeyringStorage;

use async_trait::async_trait;

use crate::error::CredentialError;

/// A persistent string key-value store.
///
/// Each key holds either no value or exactly one string; a `set` overwrites
/// any prior value. Concurrent writes to the same key race with
/// backend-defined last-write-wins semantics — the port imposes no
/// additional locking across calls.
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Read the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, CredentialError>;

    /// Persist `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> Result<(), CredentialError>;

    /// Persist all `pairs` in one batch operation.
    async fn multi_set(&self, pairs: &[(&str, &str)]) -> Result<(), CredentialError>;

    /// Remove all `keys` in one batch operation. Missing keys are not an
    /// error.
    async fn multi_remove(&self, keys: &[&str]) -> Result<(), CredentialError>;
}
