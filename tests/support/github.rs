//! Mock GitHub secrets API.

use serde_json::{json, Value};
use wiremock::matchers::{bearer_token, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{OWNER, REPO, TOKEN};

/// `/repos/{OWNER}/{REPO}/actions/secrets[/tail]`.
pub fn secrets_path(tail: Option<&str>) -> String {
    match tail {
        Some(tail) => format!("/repos/{}/{}/actions/secrets/{}", OWNER, REPO, tail),
        None => format!("/repos/{}/{}/actions/secrets", OWNER, REPO),
    }
}

/// Serve the repository public key. Only authenticated requests carrying
/// the versioned GitHub headers are answered.
pub async fn mount_public_key(server: &MockServer, key_id: &str, key_b64: &str) {
    Mock::given(method("GET"))
        .and(path(secrets_path(Some("public-key"))))
        .and(bearer_token(TOKEN))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": key_id,
            "key": key_b64,
        })))
        .mount(server)
        .await;
}

/// Serve a single page of secret names.
pub async fn mount_list(server: &MockServer, names: &[&str]) {
    let secrets: Vec<Value> = names
        .iter()
        .map(|n| {
            json!({
                "name": n,
                "created_at": "2024-01-10T14:59:22Z",
                "updated_at": "2024-01-10T14:59:22Z",
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path(secrets_path(None)))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": names.len(),
            "secrets": secrets,
        })))
        .mount(server)
        .await;
}

/// Accept every PUT to a secret with `status`.
pub async fn mount_put_any(server: &MockServer, status: u16) {
    Mock::given(method("PUT"))
        .and(path_regex(r"^/repos/[^/]+/[^/]+/actions/secrets/[^/]+$"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Answer PUTs to one secret with `status` and GitHub's error body shape.
pub async fn mount_put(server: &MockServer, name: &str, status: u16) {
    let response = if (200..300).contains(&status) {
        ResponseTemplate::new(status)
    } else {
        ResponseTemplate::new(status).set_body_json(json!({
            "message": "Secret names can only contain alphanumeric characters ([a-z], [A-Z], [0-9]) or underscores (_).",
            "documentation_url": "https://docs.github.com/rest/actions/secrets",
        }))
    };

    Mock::given(method("PUT"))
        .and(path(secrets_path(Some(name))))
        .respond_with(response)
        .with_priority(1)
        .mount(server)
        .await;
}

/// Answer DELETEs to one secret with `status`.
pub async fn mount_delete(server: &MockServer, name: &str, status: u16) {
    Mock::given(method("DELETE"))
        .and(path(secrets_path(Some(name))))
        .and(bearer_token(TOKEN))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Every PUT the server received, as (secret name, JSON body), in order.
pub async fn received_puts(server: &MockServer) -> Vec<(String, Value)> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .into_iter()
        .filter(|r| r.method.as_str() == "PUT")
        .map(|r| {
            let name = r
                .url
                .path_segments()
                .and_then(|mut s| s.next_back())
                .unwrap_or_default()
                .to_string();
            let body: Value = serde_json::from_slice(&r.body).expect("PUT body is JSON");
            (name, body)
        })
        .collect()
}
