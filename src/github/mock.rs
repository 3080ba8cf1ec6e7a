//! wiremock-based GitHub mock server for testing.
//!
//! Provides `DependabotMockServer` for HTTP-level mocking of the
//! Dependabot organization secret endpoints. Mocking at the HTTP level
//! lets tests verify the actual requests (method, route, body, paging)
//! rather than stubbing the client trait.
//!
//! # Usage
//!
//! ```ignore
//! let mock = DependabotMockServer::start().await;
//! let secret = mock.secret("acme", "DEPLOY_KEY");
//!
//! secret.set_selected(&[101, 202]).await;
//! secret.list_selected(&[101, 202]).await;
//! secret.list_selected_pages(&[vec![101], vec![202]]).await;
//!
//! mock.account("acme", "Organization").await;
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::GitHubClient;

/// Repository object as returned inside the paginated listing. Only `id`
/// matters to the code under test; the rest makes the shape realistic.
fn mock_repository(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "node_id": format!("R_{id}"),
        "name": format!("repo-{id}"),
        "full_name": format!("acme/repo-{id}"),
        "private": true
    })
}

fn page_body(total_count: usize, ids: &[u64]) -> serde_json::Value {
    json!({
        "total_count": total_count,
        "repositories": ids.iter().map(|id| mock_repository(*id)).collect::<Vec<_>>()
    })
}

/// wiremock-based mock server for the Dependabot secret endpoints.
pub struct DependabotMockServer {
    server: MockServer,
}

impl DependabotMockServer {
    /// Start a new mock server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Get a `GitHubClient` configured to use this mock server.
    pub fn client(&self) -> GitHubClient {
        GitHubClient::with_base_url(&self.server.uri(), "test-token").unwrap()
    }

    /// Create a secret context for building endpoint mocks.
    pub fn secret<'a>(&'a self, org: &'a str, secret_name: &'a str) -> MockSecretContext<'a> {
        MockSecretContext {
            server: &self.server,
            org,
            secret_name,
        }
    }

    /// Mock GET /users/{login} with the given account type
    /// ("Organization" or "User").
    pub async fn account(&self, login: &str, kind: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{login}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "login": login,
                "id": 1,
                "node_id": "O_test",
                "type": kind,
                "site_admin": false
            })))
            .mount(&self.server)
            .await;
    }

    /// Assert that no request reached the server at all.
    pub async fn assert_no_requests(&self) {
        let requests = self.server.received_requests().await.unwrap_or_default();
        assert!(
            requests.is_empty(),
            "expected no API calls, got {}",
            requests.len()
        );
    }
}

/// Mock builders scoped to one organization secret.
pub struct MockSecretContext<'a> {
    server: &'a MockServer,
    org: &'a str,
    secret_name: &'a str,
}

impl MockSecretContext<'_> {
    fn route(&self) -> String {
        format!(
            "/orgs/{}/dependabot/secrets/{}/repositories",
            self.org, self.secret_name
        )
    }

    /// Mock the PUT endpoint, matching the exact id list in the body.
    /// Expects exactly one call; verified when the server drops.
    pub async fn set_selected(&self, expected_ids: &[u64]) {
        Mock::given(method("PUT"))
            .and(path(self.route()))
            .and(body_json(json!({ "selected_repository_ids": expected_ids })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(self.server)
            .await;
    }

    /// Mock the listing endpoint with a single page of repositories.
    pub async fn list_selected(&self, ids: &[u64]) {
        self.list_selected_pages(&[ids.to_vec()]).await;
    }

    /// Mock the listing endpoint with multiple pages chained through
    /// `Link` headers, the way GitHub paginates.
    pub async fn list_selected_pages(&self, pages: &[Vec<u64>]) {
        let total_count: usize = pages.iter().map(|page| page.len()).sum();

        // Later pages carry a `page=N` query matcher and must be mounted
        // first: wiremock picks the first mounted mock that matches, and
        // the first-page mock matches any GET on the route.
        for (index, ids) in pages.iter().enumerate().rev() {
            let page_number = index + 1;

            let mut response = ResponseTemplate::new(200).set_body_json(page_body(total_count, ids));
            if page_number < pages.len() {
                let next_url = format!(
                    "{}{}?per_page=100&page={}",
                    self.server.uri(),
                    self.route(),
                    page_number + 1
                );
                response = response.insert_header("link", format!("<{next_url}>; rel=\"next\"").as_str());
            }

            let mock = Mock::given(method("GET")).and(path(self.route()));
            let mock = if page_number > 1 {
                mock.and(query_param("page", page_number.to_string()))
            } else {
                mock
            };
            mock.respond_with(response).mount(self.server).await;
        }
    }

    /// Mock the listing endpoint returning 404, e.g. for a secret that
    /// does not exist.
    pub async fn list_not_found(&self) {
        Mock::given(method("GET"))
            .and(path(self.route()))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(self.server)
            .await;
    }
}
