//! Dependabot organization secret operations.
//!
//! Covers the two endpoints behind the repository allow-list of an
//! organization secret: replacing the selected set and listing it back.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::GitHubClient;
use super::error::Result;

/// Page size used when listing selected repositories.
const PER_PAGE: u8 = 100;

#[derive(Debug, Serialize)]
struct SelectedRepositoryIds<'a> {
    selected_repository_ids: &'a [u64],
}

#[derive(Debug, Serialize)]
struct ListParams {
    per_page: u8,
}

/// The only field we need from the repository objects in the listing.
#[derive(Debug, Deserialize)]
struct SelectedRepository {
    id: u64,
}

/// Trait for Dependabot organization secret operations.
#[async_trait]
pub trait DependabotSecretsClient: Send + Sync {
    /// Replace the full set of repositories allowed to use an organization
    /// secret. The previous set does not survive; an empty slice revokes
    /// access for every repository.
    async fn set_selected_repositories(
        &self,
        org: &str,
        secret_name: &str,
        repository_ids: &[u64],
    ) -> Result<()>;

    /// List the ids of every repository allowed to use an organization
    /// secret, following pagination until the server reports no next page.
    async fn list_selected_repositories(&self, org: &str, secret_name: &str) -> Result<Vec<u64>>;
}

fn selected_repositories_route(org: &str, secret_name: &str) -> String {
    format!("/orgs/{org}/dependabot/secrets/{secret_name}/repositories")
}

#[async_trait]
impl DependabotSecretsClient for GitHubClient {
    async fn set_selected_repositories(
        &self,
        org: &str,
        secret_name: &str,
        repository_ids: &[u64],
    ) -> Result<()> {
        debug!(org, secret_name, count = repository_ids.len(), "replacing selected repositories");

        let body = SelectedRepositoryIds {
            selected_repository_ids: repository_ids,
        };
        // The endpoint answers 204 with no body, so skip octocrab's JSON
        // response handling and only map error statuses.
        let response = self
            .client
            ._put(selected_repositories_route(org, secret_name), Some(&body))
            .await?;
        octocrab::map_github_error(response).await?;

        Ok(())
    }

    async fn list_selected_repositories(&self, org: &str, secret_name: &str) -> Result<Vec<u64>> {
        let route = selected_repositories_route(org, secret_name);
        let mut page: octocrab::Page<SelectedRepository> = self
            .client
            .get(&route, Some(&ListParams { per_page: PER_PAGE }))
            .await?;

        let mut ids = Vec::new();
        loop {
            ids.extend(page.items.iter().map(|repo| repo.id));
            match self.client.get_page(&page.next).await? {
                Some(next) => page = next,
                None => break,
            }
        }

        debug!(org, secret_name, count = ids.len(), "listed selected repositories");
        Ok(ids)
    }
}
