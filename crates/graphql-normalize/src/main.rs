mod cli;
mod command;
mod command_result;
mod commands;
mod graphql_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> anyhow::Result<ExitCode> {
    let mut cli = Cli::parse();
    let log_level_warning = setup_logger(&cli);
    if let Some(warning) = log_level_warning {
        log::warn!("{warning}");
    }

    match cli.cmd.take() {
        Some(command) => Ok(command.run(&cli).await.emit()),
        None => {
            cli.run_default().await?;
            Ok(ExitCode::SUCCESS)
        },
    }
}

/// Map a `LOG_LEVEL` value to a tracing level. Unset means the default.
fn parse_log_level(env_val: Option<&str>) -> Result<tracing::Level, String> {
    let Some(env_val) = env_val else {
        return Ok(DEFAULT_LOG_LEVEL);
    };
    match env_val.trim().to_ascii_lowercase().as_str() {
        "" => Ok(DEFAULT_LOG_LEVEL),
        "debug" | "verbose" => Ok(tracing::Level::DEBUG),
        "error" => Ok(tracing::Level::ERROR),
        "info" => Ok(tracing::Level::INFO),
        "trace" => Ok(tracing::Level::TRACE),
        "warn" => Ok(tracing::Level::WARN),
        _ => Err(format!(
            "Invalid `LOG_LEVEL` environment variable value: `{env_val}`",
        )),
    }
}

/// Install the stderr subscriber. Returns a warning to log once logging is
/// up if `LOG_LEVEL` could not be understood.
fn setup_logger(cli: &Cli) -> Option<String> {
    let (log_level, warning) =
        if cli.verbose {
            (tracing::Level::DEBUG, None)
        } else {
            let env_val = std::env::var("LOG_LEVEL").ok();
            match parse_log_level(env_val.as_deref()) {
                Ok(level) => (level, None),
                Err(warning) => (DEFAULT_LOG_LEVEL, Some(warning)),
            }
        };

    // stdout carries normalized documents.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    warning
}
