mod check;
mod normalize;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use normalize::NormalizeCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-normalize")]
pub(crate) enum CommandEnum {
    /// Report files that are not already in normalized form.
    Check(Box<CheckCmd>),

    /// Print (or rewrite in place) the normalized form of GraphQL files.
    Normalize(Box<NormalizeCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Normalize(cmd) => cmd.run(cli).await,
        }
    }
}
