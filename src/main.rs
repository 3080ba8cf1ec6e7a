mod cli;
mod github;
mod owner;
mod secrets;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let Cli { command } = Cli::parse();

    match command {
        Commands::Apply(args) => secrets::commands::run_apply(&args).await?,
        Commands::Show(args) => secrets::commands::run_show(&args).await?,
        Commands::Clear(args) => secrets::commands::run_clear(&args).await?,
        Commands::Import(args) => secrets::commands::run_import(&args).await?,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "depscope", &mut std::io::stdout());
        }
    }

    Ok(())
}
