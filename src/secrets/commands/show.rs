use clap::Args;

use crate::secrets::{SecretRepositories, SecretRepositoriesState};

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub target: super::TargetArgs,

    /// Print the full state as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let (client, owner) = super::build_context(&args.target.owner).await?;
    let resource = SecretRepositories::new(&client, &owner);

    let mut state = SecretRepositoriesState::new(&args.target.secret, []);
    state.id = Some(args.target.secret.clone());
    resource.read(&mut state).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        super::print_ids(state.selected_repository_ids);
    }

    Ok(())
}
