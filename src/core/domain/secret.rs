//! Secret types.
//!
//! [`SecretEntry`] holds a plaintext value on its way to the cipher;
//! [`EncryptedSecret`] is what gets submitted to GitHub.

use std::fmt;

use zeroize::Zeroizing;

use crate::core::types::{EncryptedValue, KeyId, SecretName};

/// A secret name with its plaintext value. The value is wiped on drop.
pub struct SecretEntry {
    name: SecretName,
    value: Zeroizing<Vec<u8>>,
}

impl SecretEntry {
    /// Create an entry from a name and plaintext bytes.
    pub fn new(name: impl Into<SecretName>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Secret name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value
    pub fn plaintext(&self) -> &[u8] {
        &self.value
    }
}

impl fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretEntry")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

/// A sealed secret ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret {
    name: SecretName,
    ciphertext: EncryptedValue,
    key_id: KeyId,
}

impl EncryptedSecret {
    /// Create from a name, base64 ciphertext and the id of the key used.
    pub fn new(name: impl Into<SecretName>, ciphertext: EncryptedValue, key_id: impl Into<KeyId>) -> Self {
        Self {
            name: name.into(),
            ciphertext,
            key_id: key_id.into(),
        }
    }

    /// Secret name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base64 ciphertext
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    /// Id of the public key the ciphertext was sealed against
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

impl fmt::Display for EncryptedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
