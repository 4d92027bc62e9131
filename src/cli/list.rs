//! List command.

use tracing::info;

use crate::cli::{block_on, output};
use crate::core::api::{GitHubClient, SecretsApi};
use crate::core::config::Settings;
use crate::core::domain::RepositoryRef;
use crate::error::Result;

/// List the secret names defined on a repository.
pub fn execute(settings: &Settings, repo: &RepositoryRef, json: bool) -> Result<()> {
    info!("Listing secrets in {}", repo);
    let credential = settings.credential()?;
    let client = GitHubClient::new(settings)?;

    let names = block_on(client.list_secret_names(repo, credential))??;

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
        return Ok(());
    }

    if names.is_empty() {
        output::dimmed(&format!("no secrets defined in {}", repo));
        return Ok(());
    }

    output::header(&format!("Secrets in {}:", output::repo(repo)));
    for name in &names {
        output::list_item(name);
    }

    Ok(())
}
