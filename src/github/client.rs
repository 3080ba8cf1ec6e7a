//! GitHub API client implementation using octocrab.

use std::process::Command;

use super::error::{GitHubError, Result};

/// Thin wrapper around octocrab so sibling modules can hang typed
/// operations off a single authenticated client.
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
}

impl GitHubClient {
    /// Create a client authenticated against api.github.com.
    pub fn new() -> Result<Self> {
        let token = resolve_token()?;
        let client = octocrab::Octocrab::builder().personal_token(token).build()?;
        Ok(Self { client })
    }

    /// Create a client against a non-default API base URL.
    /// Used by tests to point at a local mock server.
    pub fn with_base_url(base_url: &str, token: &str) -> Result<Self> {
        let client = octocrab::Octocrab::builder()
            .personal_token(token.to_string())
            .base_uri(base_url)?
            .build()?;
        Ok(Self { client })
    }
}

/// Resolve a GitHub token: `GITHUB_TOKEN` if set, otherwise `gh auth token`
/// to reuse the authentication from GitHub CLI.
fn resolve_token() -> Result<String> {
    if let Some(token) = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty()) {
        return Ok(token);
    }

    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .map_err(|e| GitHubError::Token(format!("Failed to run gh auth token: {e}")))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitHubError::Token(format!(
            "gh auth token failed: {stderr}"
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(GitHubError::Token(
            "gh auth token returned an empty token".to_string(),
        ));
    }

    Ok(token)
}
