//! Repository allow-lists for organization Dependabot secrets.
//!
//! The state is declarative: a secret name plus the full set of repository
//! ids that may use it. Handlers translate that desired state into API
//! calls; nothing is applied incrementally.

pub mod commands;
mod error;
mod resource;
mod state;
mod validate;

pub use error::SecretsError;
pub use resource::SecretRepositories;
pub use state::SecretRepositoriesState;
