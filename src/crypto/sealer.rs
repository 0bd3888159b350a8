use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use base64::Engine as _;
use rand::RngCore;

use crate::error::CredentialError;

/// Seals token values with AES-256-GCM before they reach the storage port.
///
/// Wire form is base64(nonce || ciphertext); the GCM tag authenticates the
/// value, so a tampered or truncated entry fails to unseal rather than
/// yielding garbage.
pub struct TokenSealer {
    cipher: Aes256Gcm,
}

impl TokenSealer {
    /// Create a sealer from a base64-encoded 32-byte master key.
    pub fn new(master_key_b64: &str) -> Result<Self, CredentialError> {
        let master_key = base64::engine::general_purpose::STANDARD
            .decode(master_key_b64)
            .map_err(|e| CredentialError::Crypto(format!("Invalid MASTER_KEY base64: {e}")))?;

        if master_key.len() != 32 {
            return Err(CredentialError::Crypto(format!(
                "MASTER_KEY must be 32 bytes, got {}",
                master_key.len()
            )));
        }

        let cipher = Aes256Gcm::new_from_slice(&master_key)
            .map_err(|e| CredentialError::Crypto(format!("Failed to init AES cipher: {e}")))?;

        Ok(Self { cipher })
    }

    /// Seal a plaintext value. Each call draws a fresh nonce.
    pub fn seal(&self, plaintext: &str) -> Result<String, CredentialError> {
        let mut nonce_bytes = [0u8; 12];
        rand::thread_rng().fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| CredentialError::Encryption(format!("Encryption failed: {e}")))?;

        let mut combined = nonce_bytes.to_vec();
        combined.extend_from_slice(&ciphertext);

        Ok(base64::engine::general_purpose::STANDARD.encode(&combined))
    }

    /// Unseal base64(nonce || ciphertext) back to the plaintext value.
    pub fn unseal(&self, sealed_b64: &str) -> Result<String, CredentialError> {
        let combined = base64::engine::general_purpose::STANDARD
            .decode(sealed_b64)
            .map_err(|e| CredentialError::Decryption(format!("Invalid base64: {e}")))?;

        if combined.len() < 12 {
            return Err(CredentialError::Decryption("Sealed value too short".into()));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(12);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| CredentialError::Decryption(format!("Decryption failed: {e}")))?;

        String::from_utf8(plaintext)
            .map_err(|e| CredentialError::Decryption(format!("Invalid UTF-8 after decrypt: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_sealer() -> TokenSealer {
        // 32-byte key for AES-256, base64 encoded
        let key = base64::engine::general_purpose::STANDARD.encode([0x42u8; 32]);
        TokenSealer::new(&key).unwrap()
    }

    #[test]
    fn test_seal_unseal_roundtrip() {
        let sealer = test_sealer();
        let plaintext = "eyJhbGciOiJIUzI1NiJ9.access-token";
        let sealed = sealer.seal(plaintext).unwrap();
        assert_ne!(sealed, plaintext);
        let unsealed = sealer.unseal(&sealed).unwrap();
        assert_eq!(unsealed, plaintext);
    }

    #[test]
    fn test_seal_produces_different_ciphertexts() {
        let sealer = test_sealer();
        let a = sealer.seal("same-input").unwrap();
        let b = sealer.seal("same-input").unwrap();
        // Different nonces → different ciphertexts
        assert_ne!(a, b);
    }

    #[test]
    fn test_tamper_detection() {
        let sealer = test_sealer();
        let sealed = sealer.seal("legit-token").unwrap();
        let tampered = format!("{}X", sealed);
        assert!(sealer.unseal(&tampered).is_err());
    }

    #[test]
    fn test_rejects_short_key() {
        let short = base64::engine::general_purpose::STANDARD.encode([0x42u8; 16]);
        assert!(TokenSealer::new(&short).is_err());
    }
}
