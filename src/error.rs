//! Error types.
//!
//! Each concern has its own error enum; [`Error`] wraps them so command
//! handlers can propagate everything with `?`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Batch(#[from] BatchError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// A provisioning run finished but not every entry succeeded.
    #[error("{failed} of {total} secrets were not provisioned")]
    Incomplete { failed: usize, total: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration and credential resolution failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no GitHub token provided: pass --token or set GITHUB_TOKEN")]
    MissingToken,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read {path}: {reason}")]
    ReadFile { path: PathBuf, reason: String },
}

/// Local input validation failures (names, repository references).
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid repository '{input}': {reason}")]
    InvalidRepository { input: String, reason: String },
}

/// Batch input file failures. Raised before any remote call is made.
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read batch file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse batch file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("value for '{0}' must be a string")]
    NonStringValue(String),

    #[error("duplicate secret name '{0}' (names are case-insensitive)")]
    DuplicateName(String),

    #[error("secret name cannot be empty")]
    EmptyName,
}

/// Local encryption precondition failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Remote API failures, translated from HTTP status codes and transport errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("not found: {resource}")]
    NotFound { resource: String },

    #[error("rejected by GitHub: {message}")]
    Validation { message: String },

    #[error("unexpected response: {0}")]
    Protocol(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Coarse classification used in summaries and per-entry outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Auth,
    NotFound,
    Validation,
    Protocol,
    Transport,
    InvalidKeyMaterial,
    Encoding,
    Config,
    Input,
    /// A batch run finished with entries not provisioned.
    Incomplete,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Auth => "auth",
            ErrorKind::NotFound => "not found",
            ErrorKind::Validation => "validation",
            ErrorKind::Protocol => "protocol",
            ErrorKind::Transport => "transport",
            ErrorKind::InvalidKeyMaterial => "invalid key material",
            ErrorKind::Encoding => "encoding",
            ErrorKind::Config => "config",
            ErrorKind::Input => "input",
            ErrorKind::Incomplete => "incomplete",
        };
        f.write_str(s)
    }
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(ConfigError::MissingToken) => ErrorKind::Auth,
            Error::Config(_) => ErrorKind::Config,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Batch(_) => ErrorKind::Input,
            Error::Cipher(CipherError::InvalidKeyMaterial(_)) => ErrorKind::InvalidKeyMaterial,
            Error::Cipher(CipherError::Encoding(_)) => ErrorKind::Encoding,
            Error::Api(e) => e.kind(),
            Error::Incomplete { .. } => ErrorKind::Incomplete,
            Error::Json(_) | Error::Io(_) | Error::Prompt(_) | Error::Other(_) => ErrorKind::Input,
        }
    }
}

impl ApiError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Auth { .. } => ErrorKind::Auth,
            ApiError::NotFound { .. } => ErrorKind::NotFound,
            ApiError::Validation { .. } => ErrorKind::Validation,
            ApiError::Protocol(_) => ErrorKind::Protocol,
            ApiError::Transport(_) => ErrorKind::Transport,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
