/// Unified error type for the credstore crate.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    // ── Storage ─────────────────────────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    // ── Sealing ─────────────────────────────────────────────────────────
    #[error("Encryption error: {0}")]
    Encryption(String),

    #[error("Decryption error: {0}")]
    Decryption(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    // ── Setup ───────────────────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<sqlx::Error> for CredentialError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!("Storage error: {e}");
        CredentialError::Storage(e.to_string())
    }
}
