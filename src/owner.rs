//! Typed owner context shared by every handler.
//!
//! Organization secrets only exist under organization accounts, so each
//! handler checks the owner kind before touching the network. The kind is
//! resolved once when the context is built; the per-handler guard is a
//! pure local check.

use serde::Deserialize;
use thiserror::Error;

use crate::github::{GitHubClient, GitHubError};

#[derive(Error, Debug)]
pub enum OwnerError {
    #[error("`{0}` is not an organization: organization secrets can only be managed on an organization account")]
    NotAnOrganization(String),

    #[error(transparent)]
    GitHub(#[from] GitHubError),
}

pub type Result<T> = std::result::Result<T, OwnerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    Organization,
    User,
}

/// The account the tool operates on, passed explicitly to every handler.
#[derive(Debug, Clone)]
pub struct Owner {
    pub login: String,
    pub kind: OwnerKind,
}

#[derive(Debug, Deserialize)]
struct Account {
    #[serde(rename = "type")]
    kind: String,
}

impl Owner {
    pub fn new(login: impl Into<String>, kind: OwnerKind) -> Self {
        Self {
            login: login.into(),
            kind,
        }
    }

    /// Resolve the account type from the API.
    pub async fn detect(client: &GitHubClient, login: &str) -> Result<Self> {
        let account: Account = client
            .client
            .get(format!("/users/{login}"), None::<&()>)
            .await
            .map_err(GitHubError::from)?;

        let kind = if account.kind == "Organization" {
            OwnerKind::Organization
        } else {
            OwnerKind::User
        };
        Ok(Self::new(login, kind))
    }

    /// Fail unless the owner is an organization. Handlers call this before
    /// issuing any remote request.
    pub fn ensure_organization(&self) -> Result<()> {
        match self.kind {
            OwnerKind::Organization => Ok(()),
            OwnerKind::User => Err(OwnerError::NotAnOrganization(self.login.clone())),
        }
    }
}
