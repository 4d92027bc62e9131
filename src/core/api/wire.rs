//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `GET /repos/{owner}/{repo}/actions/secrets`
#[derive(Debug, Deserialize)]
pub(super) struct SecretsPage {
    #[serde(default)]
    pub total_count: Option<usize>,
    #[serde(default)]
    pub secrets: Vec<SecretSummary>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SecretSummary {
    pub name: String,
}

/// `GET /repos/{owner}/{repo}/actions/secrets/public-key`
#[derive(Debug, Deserialize)]
pub(super) struct PublicKeyResponse {
    pub key_id: String,
    pub key: String,
}

/// `PUT /repos/{owner}/{repo}/actions/secrets/{name}`
#[derive(Debug, Serialize)]
pub(super) struct PutSecretRequest<'a> {
    pub encrypted_value: &'a str,
    pub key_id: &'a str,
}

/// Error body GitHub returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub message: Option<String>,
}
