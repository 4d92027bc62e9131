//! Bulk add command.
//!
//! Provisions every secret in a batch file and prints a per-secret summary.

use tracing::info;

use crate::cli::{block_on, output};
use crate::core::api::GitHubClient;
use crate::core::config::Settings;
use crate::core::domain::{Batch, EntryOutcome, EntryStatus, RepositoryRef};
use crate::core::provision::{ProvisionObserver, Provisioner, Silent};
use crate::error::{Error, Result};

/// Prints one line per finished entry.
struct Reporter;

impl ProvisionObserver for Reporter {
    fn key_fetched(&mut self, key_id: &str) {
        output::dimmed(&format!("using repository key {}", key_id));
    }

    fn entry_finished(&mut self, outcome: &EntryOutcome) {
        match &outcome.status {
            EntryStatus::Succeeded => output::success(&output::key(&outcome.name)),
            EntryStatus::Failed { kind, detail } => {
                output::failure(&outcome.name, format!("{}: {}", kind, detail))
            }
            EntryStatus::Skipped => output::warn(&format!("{} skipped", outcome.name)),
        }
    }
}

/// Create or update every secret in `path`.
///
/// # Errors
///
/// Fails before any request if the token is missing or the file is invalid,
/// and returns `Error::Incomplete` if any secret was not provisioned.
pub fn execute(
    settings: &Settings,
    repo: &RepositoryRef,
    path: &str,
    fail_fast: bool,
    json: bool,
) -> Result<()> {
    info!("Bulk adding secrets from {} to {}", path, repo);
    let credential = settings.credential()?;
    let batch = Batch::load(path)?;
    let total = batch.len();

    let client = GitHubClient::new(settings)?;
    let provisioner = Provisioner::new(&client).fail_fast(fail_fast);

    let result = if json {
        block_on(provisioner.run(repo, credential, batch, &mut Silent))??
    } else {
        block_on(provisioner.run(repo, credential, batch, &mut Reporter))??
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_success() {
        output::success(&format!(
            "All {} secrets have been added to {}.",
            result.succeeded(),
            output::repo(repo)
        ));
    } else {
        output::warn(&format!(
            "{} of {} secrets added to {}.",
            result.succeeded(),
            total,
            output::repo(repo)
        ));
    }

    if result.is_success() {
        Ok(())
    } else {
        Err(Error::Incomplete {
            failed: result.unsuccessful(),
            total,
        })
    }
}
