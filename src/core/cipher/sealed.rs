//! Sealed box backend.
//!
//! libsodium-compatible `crypto_box_seal`: X25519 key agreement with a fresh
//! ephemeral key pair, XSalsa20-Poly1305 for the payload.

use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use tracing::trace;

use super::Cipher;
use crate::core::domain::PublicKeyMaterial;
use crate::error::{CipherError, Result};

/// Length of an X25519 public key.
pub const KEY_LEN: usize = 32;

/// Bytes a sealed box adds to the plaintext: ephemeral public key plus tag.
pub const SEAL_OVERHEAD: usize = KEY_LEN + 16;

/// Sealed-box cipher. Stateless; every call draws a new ephemeral key pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedBox;

impl Cipher for SealedBox {
    fn name(&self) -> &'static str {
        "sealed-box"
    }

    fn encrypt(&self, plaintext: &[u8], key: &PublicKeyMaterial) -> Result<Vec<u8>> {
        let public_key = parse_public_key(key.key_bytes())?;

        trace!(
            key_id = key.key_id(),
            plaintext_len = plaintext.len(),
            "sealing"
        );

        let sealed = public_key
            .seal(&mut OsRng, plaintext)
            .map_err(|e| CipherError::Encoding(format!("sealing failed: {}", e)))?;

        trace!(ciphertext_len = sealed.len(), "sealed");

        Ok(sealed)
    }
}

/// Turn raw bytes into an X25519 public key.
///
/// The all-zero point is rejected; its shared secret is always zero.
fn parse_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let array: [u8; KEY_LEN] = bytes.try_into().map_err(|_| {
        CipherError::InvalidKeyMaterial(format!(
            "expected {} bytes, got {}",
            KEY_LEN,
            bytes.len()
        ))
    })?;

    if array.iter().all(|&b| b == 0) {
        return Err(CipherError::InvalidKeyMaterial("all-zero public key".to_string()).into());
    }

    Ok(PublicKey::from(array))
}
