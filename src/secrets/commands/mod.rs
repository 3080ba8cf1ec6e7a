mod apply;
mod clear;
mod import;
mod show;

pub use apply::{ApplyArgs, run_apply};
pub use clear::{ClearArgs, run_clear};
pub use import::{ImportArgs, run_import};
pub use show::{ShowArgs, run_show};

use clap::Args;

use crate::github::GitHubClient;
use crate::owner::Owner;

/// Arguments shared by every subcommand.
#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct TargetArgs {
    /// Organization that owns the secret
    #[arg(short, long)]
    pub owner: String,

    /// Name of the existing Dependabot secret
    #[arg(short, long)]
    pub secret: String,
}

/// Build the authenticated client and resolve the owner's account type.
pub(crate) async fn build_context(login: &str) -> anyhow::Result<(GitHubClient, Owner)> {
    let client = GitHubClient::new()?;
    let owner = Owner::detect(&client, login).await?;
    Ok((client, owner))
}

pub(crate) fn print_ids(ids: impl IntoIterator<Item = u64>) {
    for id in ids {
        println!("{id}");
    }
}
