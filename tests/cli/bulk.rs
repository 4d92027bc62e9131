//! Tests for `secret-hub bulk-add-secrets`.

use crate::support::*;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_json_file() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    let t = Test::new();
    let file = t.write("secrets.json", STANDARD_BATCH);

    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_success(&output);
    assert_stdout_contains(&output, "All 3 secrets have been added to octo/hello.");
    for (name, value) in STANDARD_SECRETS {
        assert_stdout_contains(&output, name);
        assert_output_excludes(&output, value);
    }

    let puts = received_puts(&server).await;
    assert_eq!(puts.len(), 3);
    for ((_, body), (_, value)) in puts.iter().zip(STANDARD_SECRETS) {
        assert_eq!(key.open(body["encrypted_value"].as_str().unwrap()), value.as_bytes());
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_dotenv_file() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    let t = Test::new();
    let file = t.write("deploy.env", STANDARD_DOTENV);

    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_success(&output);
    let puts = received_puts(&server).await;
    let names: Vec<&str> = puts.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["DATABASE_URL", "API_KEY", "JWT_SECRET"]);
    assert_eq!(key.open(puts[1].1["encrypted_value"].as_str().unwrap()), b"sk-test-12345");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_partial_failure_exits_nonzero() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    mount_put(&server, "API_KEY", 422).await;
    let t = Test::new();
    let file = t.write("secrets.json", STANDARD_BATCH);

    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_failure(&output);
    assert_stdout_contains(&output, "✗ API_KEY");
    assert_stdout_contains(&output, "2 of 3 secrets added");
    assert_stderr_contains(&output, "1 of 3 secrets were not provisioned");
    assert_eq!(received_puts(&server).await.len(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_json_summary() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    mount_put(&server, "JWT_SECRET", 422).await;
    let t = Test::new();
    let file = t.write("secrets.json", STANDARD_BATCH);

    let output = t
        .cmd_against(&server)
        .arg("bulk-add-secrets")
        .arg(REPO_SLUG)
        .arg(&file)
        .arg("--json")
        .output()
        .unwrap();

    assert_failure(&output);
    let summary = stdout_json(&output);
    assert_eq!(summary["key_id"], KEY_ID);
    let outcomes = summary["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0]["name"], "DATABASE_URL");
    assert_eq!(outcomes[0]["status"], "succeeded");
    assert_eq!(outcomes[2]["status"], "failed");
    assert_eq!(outcomes[2]["kind"], "validation");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_fail_fast() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    mount_put(&server, "DATABASE_URL", 422).await;
    let t = Test::new();
    let file = t.write("secrets.json", STANDARD_BATCH);

    let output = t
        .cmd_against(&server)
        .arg("bulk-add-secrets")
        .arg(REPO_SLUG)
        .arg(&file)
        .arg("--fail-fast")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stdout_contains(&output, "API_KEY skipped");
    assert_stdout_contains(&output, "JWT_SECRET skipped");
    assert_eq!(received_puts(&server).await.len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_invalid_file_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let t = Test::new();
    let file = t.write("secrets.json", r#"{"PORT": 8080}"#);

    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_failure(&output);
    assert_stderr_contains(&output, "PORT");
    assert_stderr_contains(&output, "must be a string");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_duplicate_names_rejected() {
    let server = MockServer::start().await;
    let t = Test::new();
    let file = t.write("secrets.json", r#"{"API_KEY": "a", "api_key": "b"}"#);

    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_failure(&output);
    assert_stderr_contains(&output, "duplicate");
    assert!(received_puts(&server).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_missing_file() {
    let server = MockServer::start().await;
    let t = Test::new();

    let output = t.bulk_add(&server, REPO_SLUG, &t.dir.path().join("missing.json"));

    assert_failure(&output);
    assert_stderr_contains(&output, "missing.json");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_key_fetch_failure() {
    let server = MockServer::start().await;
    let t = Test::new();
    let file = t.write("secrets.json", STANDARD_BATCH);

    // Nothing mounted: the key fetch gets a 404
    let output = t.bulk_add(&server, REPO_SLUG, &file);

    assert_failure(&output);
    assert_stderr_contains(&output, "not found");
    assert!(received_puts(&server).await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bulk_add_dotenv_keeps_dollar_signs() {
    let server = MockServer::start().await;
    let key = RepoKey::generate();
    mount_public_key(&server, KEY_ID, &key.public_b64).await;
    mount_put_any(&server, 201).await;
    let t = Test::new();
    let file = t.write(
        "prod.env",
        "PASSWORD=pa$LEAK\nOTHER=\"x${GITHUB_TOKEN}y\"\nPLAIN=abc$\n",
    );

    let output = t
        .cmd()
        .env("GITHUB_TOKEN", TOKEN)
        .env("LEAK", "EXPANDED")
        .args(["--api-url", &server.uri(), "bulk-add-secrets", REPO_SLUG])
        .arg(&file)
        .output()
        .unwrap();

    assert_success(&output);
    let puts = received_puts(&server).await;
    let values: Vec<Vec<u8>> = puts
        .iter()
        .map(|(_, body)| key.open(body["encrypted_value"].as_str().unwrap()))
        .collect();
    assert_eq!(values[0], b"pa$LEAK");
    assert_eq!(values[1], b"x${GITHUB_TOKEN}y");
    assert_eq!(values[2], b"abc$");
}
