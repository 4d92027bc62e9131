//! Delete command.

use std::io::{self, IsTerminal};

use dialoguer::Confirm;
use tracing::info;

use crate::cli::{block_on, output};
use crate::core::api::{GitHubClient, SecretsApi};
use crate::core::config::Settings;
use crate::core::domain::RepositoryRef;
use crate::error::Result;

/// Delete one secret.
///
/// Asks for confirmation when attached to a terminal, unless `yes` is set.
pub fn execute(settings: &Settings, repo: &RepositoryRef, name: &str, yes: bool) -> Result<()> {
    info!("Deleting secret {} from {}", name, repo);
    let credential = settings.credential()?;

    if !yes && io::stdin().is_terminal() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete {} from {}?", output::key(name), output::repo(repo)))
            .default(false)
            .interact()?;
        if !confirmed {
            output::dimmed("aborted");
            return Ok(());
        }
    }

    let client = GitHubClient::new(settings)?;
    block_on(client.delete_secret(repo, name, credential))??;

    output::success(&format!("Secret {} deleted from {}.", output::key(name), output::repo(repo)));
    Ok(())
}
