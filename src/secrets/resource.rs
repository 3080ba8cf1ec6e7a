//! Lifecycle handlers for the repository allow-list of an organization
//! Dependabot secret.
//!
//! Create and update are the same operation: the full desired set replaces
//! whatever the remote currently has, and the state is refreshed from the
//! API immediately afterwards. Delete clears the allow-list; the secret
//! itself stays. Errors propagate unchanged, with no retry.

use tracing::debug;

use crate::github::DependabotSecretsClient;
use crate::owner::Owner;

use super::error::Result;
use super::state::SecretRepositoriesState;
use super::validate::validate_secret_name;

pub struct SecretRepositories<'a, C: DependabotSecretsClient> {
    client: &'a C,
    owner: &'a Owner,
}

impl<'a, C: DependabotSecretsClient> SecretRepositories<'a, C> {
    pub fn new(client: &'a C, owner: &'a Owner) -> Self {
        Self { client, owner }
    }

    fn secret_name<'s>(&self, state: &'s SecretRepositoriesState) -> &'s str {
        state.id.as_deref().unwrap_or(&state.secret_name)
    }

    /// Push the full desired set to the API, then refresh the state from a
    /// read so it reflects what the server actually stored.
    pub async fn create_or_update(&self, state: &mut SecretRepositoriesState) -> Result<()> {
        self.owner.ensure_organization()?;
        validate_secret_name(&state.secret_name)?;

        let ids = state.wire_ids();
        self.client
            .set_selected_repositories(&self.owner.login, &state.secret_name, &ids)
            .await?;

        state.id = Some(state.secret_name.clone());
        self.read(state).await
    }

    /// Page through the listing and overwrite the derived id set. An empty
    /// listing is a valid, empty allow-list.
    pub async fn read(&self, state: &mut SecretRepositoriesState) -> Result<()> {
        self.owner.ensure_organization()?;

        let ids = self
            .client
            .list_selected_repositories(&self.owner.login, self.secret_name(state))
            .await?;
        state.selected_repository_ids = ids.into_iter().collect();

        Ok(())
    }

    /// Revoke access for every repository by writing the empty set. The
    /// underlying secret is not deleted.
    pub async fn delete(&self, state: &SecretRepositoriesState) -> Result<()> {
        self.owner.ensure_organization()?;

        debug!(secret_name = self.secret_name(state), "clearing allow-list");
        self.client
            .set_selected_repositories(&self.owner.login, self.secret_name(state), &[])
            .await?;

        Ok(())
    }

    /// Adopt an existing secret by name, loading its current allow-list.
    /// The name is the identifier; no transformation is applied.
    pub async fn import(&self, secret_name: &str) -> Result<SecretRepositoriesState> {
        let mut state = SecretRepositoriesState::new(secret_name, []);
        state.id = Some(secret_name.to_string());
        self.read(&mut state).await?;
        Ok(state)
    }
}
