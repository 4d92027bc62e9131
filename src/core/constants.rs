//! Constants used throughout secret-hub.
//!
//! Centralizes API conventions and environment variable names.

use std::time::Duration;

/// Default GitHub REST API base URL.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub REST API version sent with every request.
pub const API_VERSION: &str = "2022-11-28";

/// Media type for the `Accept` header.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Header carrying the API version.
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// User agent sent with every request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("secret-hub/", env!("CARGO_PKG_VERSION"));

/// Default bound on every remote call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size used when listing secrets (GitHub maximum).
pub const PAGE_SIZE: usize = 100;

/// Environment variables consulted for the token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GH_TOKEN"];

/// Dotenv file consulted in the working directory.
pub const ENV_FILE: &str = ".env";

/// Directory under the user config dir holding a fallback dotenv file.
pub const CONFIG_DIR: &str = "secret-hub";

/// Environment variable for the log filter.
pub const LOG_ENV: &str = "SECRET_HUB_LOG";

/// Reserved prefix GitHub refuses for secret names.
pub const RESERVED_PREFIX: &str = "GITHUB_";
