//! GitHub API error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("Failed to resolve GitHub token: {0}")]
    Token(String),

    #[error("{}", describe_api_error(.0))]
    Api(#[from] octocrab::Error),
}

pub type Result<T> = std::result::Result<T, GitHubError>;

/// Pull the message and HTTP status out of octocrab's error type so the
/// user sees what the API actually said instead of a debug dump.
fn describe_api_error(err: &octocrab::Error) -> String {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            format!(
                "GitHub API error: {} (HTTP {})",
                source.message, source.status_code
            )
        }
        other => format!("GitHub API error: {other}"),
    }
}
