//! Runtime settings.
//!
//! Resolves the API endpoint, timeout and GitHub token once at start-up.
//! Core operations receive the resolved values and never read the
//! environment themselves.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Credential;
use crate::error::{ConfigError, Result};

/// Values supplied explicitly on the command line (or via clap's env fallback).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub token: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Where the token came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// `--token`
    Flag,
    /// An environment variable
    Env(&'static str),
    /// A dotenv file
    File(PathBuf),
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSource::Flag => f.write_str("--token"),
            TokenSource::Env(var) => write!(f, "${}", var),
            TokenSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    api_url: Url,
    timeout: Duration,
    token: Option<(Credential, TokenSource)>,
}

impl Settings {
    /// Resolve settings from the process environment and the default dotenv
    /// locations.
    ///
    /// # Errors
    ///
    /// See [`Settings::resolve`].
    pub fn from_environment(overrides: Overrides) -> Result<Self> {
        Self::resolve(
            overrides,
            |var| std::env::var(var).ok(),
            &Self::default_env_files(),
        )
    }

    /// Resolve settings.
    ///
    /// Token precedence: `overrides.token`, then each variable in
    /// `TOKEN_ENV_VARS` looked up through `env`, then each dotenv file in
    /// `env_files` order. Missing files are skipped. A missing token is not
    /// an error here; [`Settings::credential`] reports it when one is needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a malformed API URL or a zero
    /// timeout, and `ConfigError::ReadFile` for an unreadable dotenv file.
    pub fn resolve<F>(overrides: Overrides, env: F, env_files: &[PathBuf]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = parse_api_url(
            overrides
                .api_url
                .as_deref()
                .unwrap_or(constants::GITHUB_API_URL),
        )?;

        let timeout = match overrides.timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "timeout",
                    reason: "must be at least 1 second".to_string(),
                }
                .into())
            }
            Some(secs) => Duration::from_secs(secs),
            None => constants::DEFAULT_TIMEOUT,
        };

        let token = resolve_token(overrides.token, &env, env_files)?;
        match &token {
            Some((_, source)) => debug!(%source, "token resolved"),
            None => debug!("no token found"),
        }

        Ok(Self {
            api_url,
            timeout,
            token,
        })
    }

    /// Dotenv files consulted for the token: `./.env`, then
    /// `<config dir>/secret-hub/.env`.
    pub fn default_env_files() -> Vec<PathBuf> {
        let mut files = vec![PathBuf::from(constants::ENV_FILE)];
        if let Some(dir) = dirs::config_dir() {
            files.push(dir.join(constants::CONFIG_DIR).join(constants::ENV_FILE));
        }
        files
    }

    /// Base URL of the GitHub API.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Bound on every remote call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Where the token came from, if one was found.
    pub fn token_source(&self) -> Option<&TokenSource> {
        self.token.as_ref().map(|(_, source)| source)
    }

    /// The resolved token.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingToken` if no source provided one.
    pub fn credential(&self) -> Result<&Credential> {
        self.token
            .as_ref()
            .map(|(credential, _)| credential)
            .ok_or_else(|| ConfigError::MissingToken.into())
    }
}

fn parse_api_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidValue {
        field: "api-url",
        reason: format!("{}: {}", raw, e),
    })?;

    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: "api-url",
            reason: format!("{}: expected an http(s) URL", raw),
        }
        .into());
    }

    Ok(url)
}

fn resolve_token<F>(
    flag: Option<String>,
    env: &F,
    env_files: &[PathBuf],
) -> Result<Option<(Credential, TokenSource)>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(token) = flag.map(Credential::new).filter(|c| !c.is_empty()) {
        return Ok(Some((token, TokenSource::Flag)));
    }

    for var in constants::TOKEN_ENV_VARS {
        if let Some(token) = env(*var).map(Credential::new).filter(|c| !c.is_empty()) {
            return Ok(Some((token, TokenSource::Env(*var))));
        }
    }

    for path in env_files {
        if let Some(token) = token_from_file(path)? {
            return Ok(Some((token, TokenSource::File(path.clone()))));
        }
    }

    Ok(None)
}

fn token_from_file(path: &Path) -> Result<Option<Credential>> {
    if !path.is_file() {
        return Ok(None);
    }

    let read_error = |e: dotenvy::Error| ConfigError::ReadFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut found: Vec<(String, Credential)> = Vec::new();
    for item in dotenvy::from_path_iter(path).map_err(read_error)? {
        let (key, value) = item.map_err(read_error)?;
        if constants::TOKEN_ENV_VARS.contains(&key.as_str()) {
            found.push((key, Credential::new(value)));
        }
    }

    // Same precedence between variables as for the process environment
    for var in constants::TOKEN_ENV_VARS {
        if let Some((_, token)) = found.iter().find(|(k, c)| k == *var && !c.is_empty()) {
            return Ok(Some(token.clone()));
        }
    }

    Ok(None)
}
