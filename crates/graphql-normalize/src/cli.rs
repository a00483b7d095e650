use clap::CommandFactory;
use crate::commands;

/// Inline fragments into, and remove duplicate selections from, GraphQL
/// operation documents.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-normalize", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
