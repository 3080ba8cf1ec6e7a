use clap::Args;

use crate::secrets::{SecretRepositories, SecretRepositoriesState};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub target: super::TargetArgs,

    /// Repository id allowed to use the secret (repeatable; none revokes all access)
    #[arg(short = 'r', long = "repo-id")]
    pub repo_ids: Vec<u64>,
}

pub async fn run_apply(args: &ApplyArgs) -> anyhow::Result<()> {
    let (client, owner) = super::build_context(&args.target.owner).await?;
    let resource = SecretRepositories::new(&client, &owner);

    let mut state =
        SecretRepositoriesState::new(&args.target.secret, args.repo_ids.iter().copied());
    resource.create_or_update(&mut state).await?;

    println!(
        "{}: {} repositories selected",
        state.secret_name,
        state.selected_repository_ids.len()
    );
    super::print_ids(state.selected_repository_ids);

    Ok(())
}
