use clap::Args;

use crate::secrets::SecretRepositories;

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct ImportArgs {
    #[command(flatten)]
    pub target: super::TargetArgs,
}

pub async fn run_import(args: &ImportArgs) -> anyhow::Result<()> {
    let (client, owner) = super::build_context(&args.target.owner).await?;
    let resource = SecretRepositories::new(&client, &owner);

    let state = resource.import(&args.target.secret).await?;

    println!(
        "imported {}: {} repositories selected",
        state.secret_name,
        state.selected_repository_ids.len()
    );
    super::print_ids(state.selected_repository_ids);

    Ok(())
}
