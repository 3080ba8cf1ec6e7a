use thiserror::Error;

use crate::github::GitHubError;
use crate::owner::OwnerError;

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("Invalid secret name `{name}`: {reason}")]
    InvalidSecretName { name: String, reason: &'static str },

    #[error(transparent)]
    Owner(#[from] OwnerError),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, SecretsError>;
