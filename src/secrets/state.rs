//! Declarative state for a secret's repository allow-list.

use std::collections::BTreeSet;

use serde::Serialize;

/// Desired and derived state of one secret's allow-list.
///
/// `secret_name` identifies the resource: pointing it at a different name
/// means managing a different secret, never renaming this one. The id set
/// is unordered desired state, replaced wholesale on every update.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SecretRepositoriesState {
    /// Resource identifier; set to the secret name once created or imported.
    pub id: Option<String>,
    /// Name of the existing organization secret.
    pub secret_name: String,
    /// Repository ids allowed to use the secret.
    pub selected_repository_ids: BTreeSet<u64>,
}

impl SecretRepositoriesState {
    pub fn new(secret_name: impl Into<String>, ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            id: None,
            secret_name: secret_name.into(),
            selected_repository_ids: ids.into_iter().collect(),
        }
    }

    /// Ids in the order they go on the wire. The remote treats the list as
    /// a set, so any order works; ascending keeps requests deterministic.
    pub fn wire_ids(&self) -> Vec<u64> {
        self.selected_repository_ids.iter().copied().collect()
    }
}
