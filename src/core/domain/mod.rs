//! Domain types.

mod batch;
mod credential;
mod outcome;
mod public_key;
mod repository;
mod secret;

pub use batch::{Batch, BatchFormat};
pub use credential::Credential;
pub use outcome::{EntryOutcome, EntryStatus, ProvisioningResult};
pub use public_key::PublicKeyMaterial;
pub use repository::RepositoryRef;
pub use secret::{EncryptedSecret, SecretEntry};
