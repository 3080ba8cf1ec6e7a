use clap::Args;

use crate::secrets::{SecretRepositories, SecretRepositoriesState};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ClearArgs {
    #[command(flatten)]
    pub target: super::TargetArgs,
}

pub async fn run_clear(args: &ClearArgs) -> anyhow::Result<()> {
    let (client, owner) = super::build_context(&args.target.owner).await?;
    let resource = SecretRepositories::new(&client, &owner);

    let mut state = SecretRepositoriesState::new(&args.target.secret, []);
    state.id = Some(args.target.secret.clone());
    resource.delete(&state).await?;

    println!("{}: access revoked for all repositories", state.secret_name);

    Ok(())
}
