//! Batch provisioning.
//!
//! Fetches the repository public key once, then seals and submits each entry
//! in batch order. One failing entry does not stop the others unless
//! fail-fast is requested; either way the result has one outcome per entry.

use tracing::{debug, info, warn};

use crate::core::api::SecretsApi;
use crate::core::cipher::{Cipher, SealedBox};
use crate::core::domain::{
    Batch, Credential, EncryptedSecret, EntryOutcome, ProvisioningResult, PublicKeyMaterial,
    RepositoryRef, SecretEntry,
};
use crate::core::validation::validate_secret_name;
use crate::error::Result;

/// Progress hooks. Called with names and key ids only, never with values or
/// credentials.
pub trait ProvisionObserver {
    /// The repository key was fetched.
    fn key_fetched(&mut self, _key_id: &str) {}

    /// Processing of entry `index` (0-based, batch order) started.
    fn entry_started(&mut self, _index: usize, _name: &str) {}

    /// An entry reached its final state.
    fn entry_finished(&mut self, _outcome: &EntryOutcome) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default)]
pub struct Silent;

impl ProvisionObserver for Silent {}

/// Runs a batch against a [`SecretsApi`].
pub struct Provisioner<'a, A: ?Sized, C = SealedBox> {
    api: &'a A,
    cipher: C,
    fail_fast: bool,
}

impl<'a, A> Provisioner<'a, A, SealedBox>
where
    A: SecretsApi + ?Sized,
{
    /// Provisioner using the sealed-box cipher.
    pub fn new(api: &'a A) -> Self {
        Self::with_cipher(api, SealedBox)
    }
}

impl<'a, A, C> Provisioner<'a, A, C>
where
    A: SecretsApi + ?Sized,
    C: Cipher,
{
    /// Provisioner using a specific cipher.
    pub fn with_cipher(api: &'a A, cipher: C) -> Self {
        Self {
            api,
            cipher,
            fail_fast: false,
        }
    }

    /// Stop at the first failed entry; later entries are reported as skipped.
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Provision every entry of `batch` into `repo`.
    ///
    /// The batch is consumed; each plaintext is wiped as soon as its entry
    /// has been handled.
    ///
    /// # Errors
    ///
    /// Only a failed public key fetch is returned as an error, in which case
    /// nothing was submitted. Per-entry failures are recorded in the result.
    pub async fn run(
        &self,
        repo: &RepositoryRef,
        credential: &Credential,
        batch: Batch,
        observer: &mut dyn ProvisionObserver,
    ) -> Result<ProvisioningResult> {
        info!(%repo, entries = batch.len(), cipher = self.cipher.name(), "provisioning batch");

        let key = self.api.fetch_public_key(repo, credential).await?;
        observer.key_fetched(key.key_id());

        let mut outcomes = Vec::with_capacity(batch.len());
        let mut halted = false;

        for (index, entry) in batch.into_iter().enumerate() {
            if halted {
                let outcome = EntryOutcome::skipped(entry.name());
                observer.entry_finished(&outcome);
                outcomes.push(outcome);
                continue;
            }

            observer.entry_started(index, entry.name());

            let outcome = match self.provision_entry(repo, credential, &key, &entry).await {
                Ok(()) => {
                    debug!(name = entry.name(), "secret provisioned");
                    EntryOutcome::succeeded(entry.name())
                }
                Err(e) => {
                    warn!(name = entry.name(), kind = %e.kind(), "secret failed: {}", e);
                    halted = self.fail_fast;
                    EntryOutcome::failed(entry.name(), &e)
                }
            };

            observer.entry_finished(&outcome);
            outcomes.push(outcome);
        }

        let result = ProvisioningResult::new(key.key_id().to_string(), outcomes);
        info!(
            succeeded = result.succeeded(),
            unsuccessful = result.unsuccessful(),
            "batch finished"
        );
        Ok(result)
    }

    /// Validate, seal and submit one entry.
    async fn provision_entry(
        &self,
        repo: &RepositoryRef,
        credential: &Credential,
        key: &PublicKeyMaterial,
        entry: &SecretEntry,
    ) -> Result<()> {
        validate_secret_name(entry.name())?;
        let secret = self.seal(entry, key)?;
        self.api.put_secret(repo, &secret, credential).await
    }

    /// Seal one entry against `key`. The result always carries `key`'s id.
    pub fn seal(&self, entry: &SecretEntry, key: &PublicKeyMaterial) -> Result<EncryptedSecret> {
        let ciphertext = self.cipher.encrypt_to_base64(entry.plaintext(), key)?;
        Ok(EncryptedSecret::new(entry.name(), ciphertext, key.key_id()))
    }
}
