//! Typed credential facade over a [`StoragePort`].
//!
//! Holds exactly two secrets under fixed keys: the access token (short-lived,
//! attached to outgoing API calls) and the refresh token (longer-lived, used
//! to mint new access tokens). Written together at login, the access token
//! alone on refresh, removed together at logout.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::crypto::TokenSealer;
use crate::error::CredentialError;
use crate::port::StoragePort;

/// Storage key for the access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// A freshly minted token pair, as the external auth flow receives it from
/// the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Stateless facade over the injected storage port. The only state is
/// whatever the backend durably holds.
pub struct CredentialStore {
    port: Arc<dyn StoragePort>,
    sealer: Option<TokenSealer>,
}

impl CredentialStore {
    /// Store tokens as-is.
    pub fn new(port: Arc<dyn StoragePort>) -> Self {
        Self { port, sealer: None }
    }

    /// Seal token values with AES-256-GCM before they reach the backend.
    pub fn with_sealer(port: Arc<dyn StoragePort>, sealer: TokenSealer) -> Self {
        Self {
            port,
            sealer: Some(sealer),
        }
    }

    fn encode(&self, token: &str) -> Result<String, CredentialError> {
        match &self.sealer {
            Some(sealer) => sealer.seal(token),
            None => Ok(token.to_string()),
        }
    }

    fn decode(&self, stored: String) -> Result<String, CredentialError> {
        match &self.sealer {
            Some(sealer) => sealer.unseal(&stored),
            None => Ok(stored),
        }
    }

    async fn get_key(&self, key: &str) -> Result<Option<String>, CredentialError> {
        match self.port.get(key).await? {
            Some(stored) => Ok(Some(self.decode(stored)?)),
            None => Ok(None),
        }
    }

    /// Persist the access token, overwriting any prior value. Leaves a
    /// stored refresh token untouched.
    pub async fn set_access_token(&self, token: &str) -> Result<(), CredentialError> {
        let value = self.encode(token)?;
        self.port.set(ACCESS_TOKEN_KEY, &value).await
    }

    /// Read the stored access token, or `None` if never set.
    pub async fn get_access_token(&self) -> Result<Option<String>, CredentialError> {
        self.get_key(ACCESS_TOKEN_KEY).await
    }

    /// Persist the refresh token, overwriting any prior value.
    pub async fn set_refresh_token(&self, token: &str) -> Result<(), CredentialError> {
        let value = self.encode(token)?;
        self.port.set(REFRESH_TOKEN_KEY, &value).await
    }

    /// Read the stored refresh token, or `None` if never set.
    pub async fn get_refresh_token(&self) -> Result<Option<String>, CredentialError> {
        self.get_key(REFRESH_TOKEN_KEY).await
    }

    /// Persist both tokens in one batch write. The login path.
    pub async fn store_auth_tokens(
        &self,
        access: &str,
        refresh: &str,
    ) -> Result<(), CredentialError> {
        let access = self.encode(access)?;
        let refresh = self.encode(refresh)?;
        self.port
            .multi_set(&[
                (ACCESS_TOKEN_KEY, access.as_str()),
                (REFRESH_TOKEN_KEY, refresh.as_str()),
            ])
            .await
    }

    /// Convenience for the login path: persist a deserialized token pair.
    pub async fn store(&self, tokens: &AuthTokens) -> Result<(), CredentialError> {
        self.store_auth_tokens(&tokens.access_token, &tokens.refresh_token)
            .await
    }

    /// Remove both tokens in one batch operation. The logout path.
    pub async fn clear_tokens(&self) -> Result<(), CredentialError> {
        tracing::debug!("Clearing stored credentials");
        self.port
            .multi_remove(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY])
            .await
    }
}
