//! GitHub Actions secrets API.
//!
//! [`SecretsApi`] is the seam between the provisioning logic and the wire;
//! [`GitHubClient`] implements it over HTTPS with reqwest.
//!
//! ## Error translation
//!
//! | Status            | Error                  |
//! |-------------------|------------------------|
//! | 401, 403          | `ApiError::Auth`       |
//! | 404               | `ApiError::NotFound`   |
//! | 422               | `ApiError::Validation` |
//! | other 4xx         | `ApiError::Protocol`   |
//! | 5xx, I/O, timeout | `ApiError::Transport`  |

use async_trait::async_trait;

use crate::core::domain::{Credential, EncryptedSecret, PublicKeyMaterial, RepositoryRef};
use crate::error::Result;

mod client;
mod wire;

pub use client::{classify_status, GitHubClient};

/// Operations on a repository's Actions secrets.
///
/// Implementations never retry. Every call is independent; the credential is
/// used for that call only.
#[async_trait]
pub trait SecretsApi: Send + Sync {
    /// Names of the secrets defined on `repo`, in the order GitHub returns them.
    async fn list_secret_names(&self, repo: &RepositoryRef, credential: &Credential) -> Result<Vec<String>>;

    /// The repository public key secrets must be sealed against.
    async fn fetch_public_key(&self, repo: &RepositoryRef, credential: &Credential) -> Result<PublicKeyMaterial>;

    /// Create or replace a secret.
    async fn put_secret(
        &self,
        repo: &RepositoryRef,
        secret: &EncryptedSecret,
        credential: &Credential,
    ) -> Result<()>;

    /// Delete a secret. A missing secret is `ApiError::NotFound`.
    async fn delete_secret(&self, repo: &RepositoryRef, name: &str, credential: &Credential) -> Result<()>;
}
