use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::secrets::commands::{ApplyArgs, ClearArgs, ImportArgs, ShowArgs};

#[derive(Parser)]
#[command(
    name = "depscope",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace the repository allow-list of an organization Dependabot secret
    Apply(ApplyArgs),

    /// Show the repositories currently allowed to use a secret
    Show(ShowArgs),

    /// Revoke access for all repositories (the secret itself is kept)
    Clear(ClearArgs),

    /// Adopt an existing secret's allow-list by name
    Import(ImportArgs),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
