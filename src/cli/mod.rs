//! Command-line interface.

pub mod bulk;
pub mod completions;
pub mod delete;
pub mod list;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::config::{Overrides, Settings};
use crate::core::domain::RepositoryRef;
use crate::error::{Error, Result};

/// secret-hub - Manage GitHub Actions repository secrets.
#[derive(Parser)]
#[command(
    name = "secret-hub",
    about = "Manage GitHub Actions repository secrets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// GitHub token (defaults to $GITHUB_TOKEN, $GH_TOKEN, then .env files)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// GitHub API root, for GitHub Enterprise Server
    #[arg(long, global = true, env = "SECRET_HUB_API_URL")]
    pub api_url: Option<String>,

    /// Timeout for each API request, in seconds
    #[arg(long, global = true, env = "SECRET_HUB_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List the secrets defined on a repository
    #[command(alias = "list")]
    ListSecrets {
        /// Repository as owner/repo
        repo: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create or update secrets from a JSON or .env file
    #[command(alias = "bulk-add")]
    BulkAddSecrets {
        /// Repository as owner/repo
        repo: String,
        /// File mapping secret names to values
        secrets_file: String,
        /// Stop at the first failed secret
        #[arg(long)]
        fail_fast: bool,
        /// Output the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a secret from a repository
    #[command(alias = "delete")]
    DeleteSecret {
        /// Repository as owner/repo
        repo: String,
        /// Secret name
        secret_name: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Log output formats.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Execute a parsed command line.
///
/// # Errors
///
/// Returns the first error the command hits. `bulk-add-secrets` also returns
/// `Error::Incomplete` when any entry was not provisioned.
pub fn execute(cli: Cli) -> Result<()> {
    let overrides = Overrides {
        token: cli.token,
        api_url: cli.api_url,
        timeout_secs: cli.timeout,
    };
    let settings = || Settings::from_environment(overrides.clone());

    match cli.command {
        Command::ListSecrets { repo, json } => list::execute(&settings()?, &parse_repo(&repo)?, json),
        Command::BulkAddSecrets {
            repo,
            secrets_file,
            fail_fast,
            json,
        } => bulk::execute(&settings()?, &parse_repo(&repo)?, &secrets_file, fail_fast, json),
        Command::DeleteSecret {
            repo,
            secret_name,
            yes,
        } => delete::execute(&settings()?, &parse_repo(&repo)?, &secret_name, yes),
        Command::Completions { shell } => completions::execute(shell),
    }
}

fn parse_repo(repo: &str) -> Result<RepositoryRef> {
    repo.parse()
}

/// Run a future to completion on a single-threaded runtime.
pub(crate) fn block_on<F: std::future::Future>(future: F) -> Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| Error::Other(format!("failed to create runtime: {}", e)))?;
    Ok(rt.block_on(future))
}
