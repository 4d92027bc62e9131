//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret name (e.g., DATABASE_URL, API_KEY).
///
/// GitHub treats names case-insensitively and stores them uppercased.
pub type SecretName = String;

/// Identifier GitHub assigns to a repository public key.
pub type KeyId = String;

/// Base64-encoded sealed-box ciphertext, as sent in `encrypted_value`.
pub type EncryptedValue = String;
