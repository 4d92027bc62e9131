//! Provisioning outcome types.

use serde::Serialize;

use crate::core::types::{KeyId, SecretName};
use crate::error::{Error, ErrorKind};

/// What happened to one batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EntryStatus {
    Succeeded,
    Failed { kind: ErrorKind, detail: String },
    /// Not attempted because an earlier entry failed in fail-fast mode.
    Skipped,
}

/// Outcome of a single batch entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryOutcome {
    pub name: SecretName,
    #[serde(flatten)]
    pub status: EntryStatus,
}

impl EntryOutcome {
    pub fn succeeded(name: impl Into<SecretName>) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Succeeded,
        }
    }

    pub fn failed(name: impl Into<SecretName>, error: &Error) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Failed {
                kind: error.kind(),
                detail: error.to_string(),
            },
        }
    }

    pub fn skipped(name: impl Into<SecretName>) -> Self {
        Self {
            name: name.into(),
            status: EntryStatus::Skipped,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, EntryStatus::Succeeded)
    }
}

/// Result of a provisioning run: one outcome per entry, in batch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisioningResult {
    key_id: KeyId,
    outcomes: Vec<EntryOutcome>,
}

impl ProvisioningResult {
    pub(crate) fn new(key_id: KeyId, outcomes: Vec<EntryOutcome>) -> Self {
        Self { key_id, outcomes }
    }

    /// Id of the public key every entry was sealed against.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// All outcomes in batch order.
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// Number of entries that were provisioned.
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of entries that failed or were skipped.
    pub fn unsuccessful(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Whether every entry was provisioned.
    pub fn is_success(&self) -> bool {
        self.unsuccessful() == 0
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
