//! Credential store — typed token persistence over the storage port.

pub mod best_effort;
pub mod tokens;

pub use best_effort::BestEffortStore;
pub use tokens::{AuthTokens, CredentialStore};
