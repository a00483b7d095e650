use crate::Cli;
use crate::CommandResult;

/// A parsed subcommand. Global flags stay on the [`Cli`] it was parsed from.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
