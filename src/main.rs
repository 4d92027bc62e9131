//! secret-hub - Manage GitHub Actions repository secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secret_hub::cli::output;
use secret_hub::cli::{execute, Cli, LogFormat};
use secret_hub::core::constants::LOG_ENV;
use secret_hub::error::{ApiError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secret_hub=debug")
        } else {
            EnvFilter::new("secret_hub=warn")
        }
    });

    let (text, json) = match cli.log_format {
        LogFormat::Text => (
            Some(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            ),
            None,
        ),
        LogFormat::Json => (None, Some(fmt::layer().with_writer(std::io::stderr).json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text)
        .with(json)
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingToken) => {
                Some("pass --token, set GITHUB_TOKEN, or add GITHUB_TOKEN to .env")
            }
            Error::Api(ApiError::Auth { .. }) => {
                Some("check that the token is valid and can manage repository secrets")
            }
            Error::Api(ApiError::NotFound { .. }) => {
                Some("check the repository and secret names, and that the token can see the repository")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
