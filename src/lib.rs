//! credstore — persistent storage for authentication credentials.
//!
//! Two secrets live here: the access token and the refresh token, each under
//! a fixed key in a pluggable key-value backend. The login flow writes both
//! together, the refresh flow rewrites the access token, logout removes both.
//! Backends plug in through the [`StoragePort`] trait; an in-memory fake,
//! an application-scoped SQLite store, and (behind the `keyring` feature)
//! the OS keychain ship in-crate.

pub mod config;
pub mod crypto;
pub mod error;
pub mod port;
pub mod store;

pub use config::{Backend, Config};
pub use crypto::TokenSealer;
pub use error::CredentialError;
pub use port::{MemoryStorage, SqliteStorage, StoragePort};
pub use store::{AuthTokens, BestEffortStore, CredentialStore};

#[cfg(feature = "keyring")]
pub use port::KeyringStorage;

use std::sync::Arc;

/// Build a ready [`CredentialStore`] from configuration: open the configured
/// backend (running migrations where the backend has a schema) and attach a
/// sealer when a master key is present.
pub async fn open(config: &Config) -> Result<CredentialStore, CredentialError> {
    let port: Arc<dyn StoragePort> = match config.backend {
        Backend::Memory => Arc::new(MemoryStorage::new()),
        Backend::Sqlite => {
            let storage = SqliteStorage::connect(&config.database_path).await?;
            storage.migrate().await?;
            Arc::new(storage)
        }
        #[cfg(feature = "keyring")]
        Backend::Keyring => Arc::new(KeyringStorage::new(&config.service_name)),
    };

    match &config.master_key {
        Some(key) => Ok(CredentialStore::with_sealer(port, TokenSealer::new(key)?)),
        None => Ok(CredentialStore::new(port)),
    }
}
