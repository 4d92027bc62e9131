//! reqwest-backed GitHub client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};

use super::wire::{ErrorBody, PublicKeyResponse, PutSecretRequest, SecretsPage};
use super::SecretsApi;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::{Credential, EncryptedSecret, PublicKeyMaterial, RepositoryRef};
use crate::error::{ApiError, Result};

/// HTTPS client for the GitHub Actions secrets endpoints.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GitHubClient {
    /// Create a client from resolved settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_base_url(settings.api_url().clone(), settings.timeout())
    }

    /// Create a client against an arbitrary API root (GitHub Enterprise, tests).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the HTTP client cannot be built.
    pub fn with_base_url(base_url: Url, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(constants::ACCEPT));
        headers.insert(
            HeaderName::from_static(constants::API_VERSION_HEADER),
            HeaderValue::from_static(constants::API_VERSION),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(constants::USER_AGENT)
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/repos/{owner}/{repo}/actions/secrets[/tail...]`, with every
    /// segment percent-encoded.
    fn secrets_url(&self, repo: &RepositoryRef, tail: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Protocol(format!("{} cannot be used as an API root", self.base_url)))?
            .pop_if_empty()
            .extend(["repos", repo.owner(), repo.name(), "actions", "secrets"])
            .extend(tail);
        Ok(url)
    }

    /// Authenticate and send a request, translating failures.
    async fn send(&self, request: RequestBuilder, credential: &Credential, resource: &str) -> Result<Response> {
        let response = request
            .bearer_auth(credential.expose())
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = status.as_u16(), "response received");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(classify_status(status, &body, resource).into())
    }
}

#[async_trait]
impl SecretsApi for GitHubClient {
    async fn list_secret_names(&self, repo: &RepositoryRef, credential: &Credential) -> Result<Vec<String>> {
        debug!(%repo, "listing secrets");
        let resource = format!("repository {}", repo);
        let mut names = Vec::new();

        for page in 1usize.. {
            let mut url = self.secrets_url(repo, &[])?;
            url.query_pairs_mut()
                .append_pair("per_page", &constants::PAGE_SIZE.to_string())
                .append_pair("page", &page.to_string());

            let response = self.send(self.http.get(url), credential, &resource).await?;
            let body: SecretsPage = read_json(response).await?;

            let returned = body.secrets.len();
            names.extend(body.secrets.into_iter().map(|s| s.name));
            trace!(page, returned, "page read");

            // Without total_count only a short page ends the listing
            let complete = body.total_count.is_some_and(|total| names.len() >= total);
            if returned < constants::PAGE_SIZE || complete {
                break;
            }
        }

        debug!(count = names.len(), "secrets listed");
        Ok(names)
    }

    async fn fetch_public_key(&self, repo: &RepositoryRef, credential: &Credential) -> Result<PublicKeyMaterial> {
        debug!(%repo, "fetching public key");
        let url = self.secrets_url(repo, &["public-key"])?;
        let resource = format!("repository {}", repo);

        let response = self.send(self.http.get(url), credential, &resource).await?;
        let body: PublicKeyResponse = read_json(response).await?;
        let key = PublicKeyMaterial::from_base64(body.key_id, &body.key)?;

        debug!(key_id = key.key_id(), "public key fetched");
        Ok(key)
    }

    async fn put_secret(
        &self,
        repo: &RepositoryRef,
        secret: &EncryptedSecret,
        credential: &Credential,
    ) -> Result<()> {
        debug!(%repo, name = secret.name(), key_id = secret.key_id(), "putting secret");
        let url = self.secrets_url(repo, &[secret.name()])?;
        let resource = format!("secret {} in {} (or the repository)", secret.name(), repo);
        let body = PutSecretRequest {
            encrypted_value: secret.ciphertext(),
            key_id: secret.key_id(),
        };

        self.send(self.http.put(url).json(&body), credential, &resource)
            .await?;
        Ok(())
    }

    async fn delete_secret(&self, repo: &RepositoryRef, name: &str, credential: &Credential) -> Result<()> {
        debug!(%repo, name, "deleting secret");
        let url = self.secrets_url(repo, &[name])?;
        let resource = format!("secret {} in {} (or the repository)", name, repo);

        self.send(self.http.delete(url), credential, &resource).await?;
        Ok(())
    }
}

/// Map a non-2xx status to an error kind.
///
/// `body` is searched for GitHub's `message` field; `resource` names what was
/// being accessed for `NotFound`.
pub fn classify_status(status: StatusCode, body: &str, resource: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string());

    match status.as_u16() {
        401 | 403 => ApiError::Auth {
            status: status.as_u16(),
            message,
        },
        404 => ApiError::NotFound {
            resource: resource.to_string(),
        },
        422 => ApiError::Validation { message },
        // rate limiting is transient
        429 => ApiError::Transport(format!("{}: {}", status.as_u16(), message)),
        400..=499 => ApiError::Protocol(format!("{}: {}", status.as_u16(), message)),
        _ => ApiError::Transport(format!("{}: {}", status.as_u16(), message)),
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ApiError::Protocol(format!("malformed response body: {}", e)).into())
}

fn transport_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Transport(format!("request timed out: {}", e))
    } else {
        ApiError::Transport(e.to_string())
    }
}
