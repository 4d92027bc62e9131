//! Repository public key type.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::core::types::KeyId;
use crate::error::{ApiError, Result};

/// A repository public key as returned by GitHub.
///
/// Length is not checked here; the cipher rejects anything that is not a
/// valid 32-byte X25519 key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    key_id: KeyId,
    key_bytes: Vec<u8>,
}

impl PublicKeyMaterial {
    /// Create key material from raw bytes.
    pub fn new(key_id: impl Into<KeyId>, key_bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            key_id: key_id.into(),
            key_bytes: key_bytes.into(),
        }
    }

    /// Decode key material from the base64 form GitHub returns.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Protocol` if `key` is not valid base64.
    pub fn from_base64(key_id: impl Into<KeyId>, key: &str) -> Result<Self> {
        let key_bytes = BASE64
            .decode(key.trim())
            .map_err(|e| ApiError::Protocol(format!("public key is not valid base64: {}", e)))?;
        Ok(Self::new(key_id, key_bytes))
    }

    /// Identifier GitHub uses to pick the matching private key.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Raw public key bytes.
    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }
}
