use anyhow::{Context, Result};

/// Which storage backend holds the credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Volatile in-process map. Useful for tests and ephemeral sessions.
    Memory,
    /// Application-scoped SQLite database (the default durable store).
    Sqlite,
    /// OS keychain via the `keyring` crate.
    #[cfg(feature = "keyring")]
    Keyring,
}

/// Store configuration, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,

    // ── SQLite ──────────────────────────────────────────────────────────
    /// Path of the SQLite database file (created on first open).
    pub database_path: String,

    // ── Keychain ────────────────────────────────────────────────────────
    /// Service name under which keychain entries are filed.
    pub service_name: String,

    // ── Sealing ─────────────────────────────────────────────────────────
    /// 32-byte base64-encoded master key for AES-256-GCM sealing of stored
    /// values. When unset, values are stored as-is.
    pub master_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let backend = match std::env::var("CREDSTORE_BACKEND")
            .unwrap_or_else(|_| "sqlite".into())
            .as_str()
        {
            "memory" => Backend::Memory,
            "sqlite" => Backend::Sqlite,
            #[cfg(feature = "keyring")]
            "keyring" => Backend::Keyring,
            other => anyhow::bail!("Unsupported CREDSTORE_BACKEND: {other}"),
        };

        Ok(Config {
            backend,
            database_path: std::env::var("CREDSTORE_DB_PATH")
                .unwrap_or_else(|_| "credstore.db".into()),
            service_name: std::env::var("CREDSTORE_SERVICE")
                .unwrap_or_else(|_| "credstore".into()),
            master_key: std::env::var("MASTER_KEY").ok(),
        })
    }

    /// Like [`Config::from_env`], but requires a master key to be present.
    /// For deployments where plaintext at rest is not acceptable.
    pub fn from_env_sealed() -> Result<Self> {
        let config = Self::from_env()?;
        config
            .master_key
            .as_ref()
            .context("MASTER_KEY is required (32 bytes, base64)")?;
        Ok(config)
    }
}
