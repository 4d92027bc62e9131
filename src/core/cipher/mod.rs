//! Cryptographic operations.
//!
//! GitHub only accepts secrets sealed against the repository public key with
//! a libsodium sealed box. [`SealedBox`] is that implementation; the
//! [`Cipher`] trait exists so the provisioner can be driven by other
//! implementations in tests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::core::domain::PublicKeyMaterial;
use crate::core::types::EncryptedValue;
use crate::error::Result;

mod sealed;

pub use sealed::{SealedBox, KEY_LEN, SEAL_OVERHEAD};

/// Public-key encryption backend.
pub trait Cipher {
    /// Encrypt `plaintext` so only the holder of the private half of `key`
    /// can read it.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKeyMaterial` if the key is unusable and
    /// `CipherError::Encoding` if the plaintext cannot be sealed.
    fn encrypt(&self, plaintext: &[u8], key: &PublicKeyMaterial) -> Result<Vec<u8>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;

    /// Encrypt and base64-encode, producing the `encrypted_value` wire form.
    ///
    /// # Errors
    ///
    /// Same as [`Cipher::encrypt`].
    fn encrypt_to_base64(&self, plaintext: &[u8], key: &PublicKeyMaterial) -> Result<EncryptedValue> {
        let sealed = self.encrypt(plaintext, key)?;
        Ok(BASE64.encode(sealed))
    }
}

/// Seal `plaintext` against `key` with the default sealed-box backend.
///
/// This is a convenience wrapper around `SealedBox::encrypt`.
///
/// # Errors
///
/// Returns `CipherError` if the key is malformed or sealing fails.
pub fn encrypt(plaintext: &[u8], key: &PublicKeyMaterial) -> Result<Vec<u8>> {
    SealedBox.encrypt(plaintext, key)
}
