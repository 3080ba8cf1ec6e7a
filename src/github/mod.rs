//! GitHub API client module using octocrab.
//!
//! Provides `GitHubClient` for the Dependabot organization secret
//! endpoints, with authentication via `GITHUB_TOKEN` or `gh auth token`.

mod client;
mod dependabot;
pub(crate) mod error;
#[cfg(test)]
pub(crate) mod mock;

pub use client::GitHubClient;
pub use dependabot::DependabotSecretsClient;
pub use error::GitHubError;
#[cfg(test)]
pub(crate) use mock::DependabotMockServer;
