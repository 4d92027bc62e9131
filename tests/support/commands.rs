//! Command helper methods for Test.

use super::fixtures::TOKEN;
use super::Test;
use assert_cmd::Command;
use std::path::Path;
use std::process::Output;
use wiremock::MockServer;

impl Test {
    /// Create a secret-hub command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME and XDG_CONFIG_HOME inside the temporary home directory
    /// - Current directory set to the test working directory
    /// - No inherited token, API root, or log filter
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secret-hub").expect("failed to find secret-hub binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        for var in [
            "GITHUB_TOKEN",
            "GH_TOKEN",
            "SECRET_HUB_API_URL",
            "SECRET_HUB_TIMEOUT",
            "SECRET_HUB_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A command pointed at `server` and authenticated with the test token.
    pub fn cmd_against(&self, server: &MockServer) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--api-url", &server.uri(), "--token", TOKEN]);
        cmd
    }

    /// Shortcut for `secret-hub list-secrets`.
    pub fn list(&self, server: &MockServer, repo: &str) -> Output {
        self.cmd_against(server)
            .args(["list-secrets", repo])
            .output()
            .expect("failed to run secret-hub list-secrets")
    }

    /// Shortcut for `secret-hub bulk-add-secrets`.
    pub fn bulk_add(&self, server: &MockServer, repo: &str, file: &Path) -> Output {
        self.cmd_against(server)
            .arg("bulk-add-secrets")
            .arg(repo)
            .arg(file)
            .output()
            .expect("failed to run secret-hub bulk-add-secrets")
    }

    /// Shortcut for `secret-hub delete-secret --yes`.
    pub fn delete(&self, server: &MockServer, repo: &str, name: &str) -> Output {
        self.cmd_against(server)
            .args(["delete-secret", repo, name, "--yes"])
            .output()
            .expect("failed to run secret-hub delete-secret")
    }
}
