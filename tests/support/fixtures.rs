//! Test fixtures and constants.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;

use secret_hub::core::domain::{Credential, RepositoryRef};

/// Token handed to the binary and expected by the mock API.
pub const TOKEN: &str = "ghp_test_token_0123456789";

pub const OWNER: &str = "octo";
pub const REPO: &str = "hello";

/// `owner/repo` form of the test repository.
pub const REPO_SLUG: &str = "octo/hello";

/// Key id the mock API reports for the repository key.
pub const KEY_ID: &str = "568250167242549743";

/// Standard secrets used across multiple tests.
pub const STANDARD_SECRETS: &[(&str, &str)] = &[
    ("DATABASE_URL", "postgres://localhost/mydb"),
    ("API_KEY", "sk-test-12345"),
    ("JWT_SECRET", "super-secret-jwt-token"),
];

/// Batch file matching `STANDARD_SECRETS`.
pub const STANDARD_BATCH: &str = r#"{
  "DATABASE_URL": "postgres://localhost/mydb",
  "API_KEY": "sk-test-12345",
  "JWT_SECRET": "super-secret-jwt-token"
}"#;

/// The same secrets in dotenv form.
pub const STANDARD_DOTENV: &str = r#"
# deployment secrets
DATABASE_URL=postgres://localhost/mydb
API_KEY="sk-test-12345"
JWT_SECRET='super-secret-jwt-token'
"#;

pub fn repo() -> RepositoryRef {
    RepositoryRef::new(OWNER, REPO).expect("valid test repository")
}

pub fn credential() -> Credential {
    Credential::new(TOKEN)
}

/// A repository key pair: the private half for opening ciphertexts, and
/// the base64 public half as GitHub would serve it.
pub struct RepoKey {
    pub secret: SecretKey,
    pub public_b64: String,
}

impl RepoKey {
    pub fn generate() -> Self {
        let secret = SecretKey::generate(&mut OsRng);
        let public_b64 = BASE64.encode(secret.public_key().as_bytes());
        Self { secret, public_b64 }
    }

    /// Decode and open an `encrypted_value` sealed against this key.
    pub fn open(&self, encrypted_value: &str) -> Vec<u8> {
        let sealed = BASE64
            .decode(encrypted_value)
            .expect("encrypted_value is not base64");
        self.secret
            .unseal(&sealed)
            .expect("ciphertext does not open with the repository key")
    }
}
