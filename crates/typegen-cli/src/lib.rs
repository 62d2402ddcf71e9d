//! OpenSpace TypeScript declaration generator CLI.
//!
//! Library half of the `openspace-typegen` binary: argument definitions,
//! configuration loading, command implementations, and output formatting.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Write the declaration file
//! - `introspect` - Summarize (and optionally save) the documentation
//! - `config` - Manage the configuration file
//! - `completions` - Generate shell completions

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod formatters;

pub use cli::{Cli, Commands};

use anyhow::Result;
use clap::CommandFactory;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use typegen_core::cli::{ExitCode, OutputFormat};

/// Initializes logging to stderr.
///
/// `--verbose` forces the `debug` level; otherwise `RUST_LOG` applies,
/// defaulting to `info`. With `json`, events are emitted as JSON lines.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool, json: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    }

    Ok(())
}

/// Executes the specified CLI command.
///
/// # Errors
///
/// Returns an error if command execution fails. Use [`exit_code_for`] to
/// map it to a process exit code.
pub async fn execute_command(
    command: Commands,
    output_format: OutputFormat,
    config_path: Option<&Path>,
) -> Result<ExitCode> {
    match command {
        Commands::Generate(args) => commands::generate::run(args, config_path, output_format).await,
        Commands::Introspect(args) => {
            commands::introspect::run(args, config_path, output_format).await
        }
        Commands::Config { action } => commands::config::run(&action, config_path, output_format),
        Commands::Completions { shell } => {
            Ok(commands::completions::run(shell, &mut Cli::command()))
        }
    }
}

/// Maps a command failure to its exit code.
///
/// The first [`typegen_core::Error`] in the chain decides; anything else is
/// a general error.
#[must_use]
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<typegen_core::Error>())
        .map_or(ExitCode::ERROR, ExitCode::for_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use typegen_core::Error;

    #[test]
    fn test_exit_code_for_connection_failure() {
        let err = anyhow::Error::from(Error::ConnectionFailed {
            address: "localhost:4681".to_string(),
            source: "connection refused".into(),
        })
        .context("failed to fetch documentation from service at localhost:4681");

        assert_eq!(exit_code_for(&err), ExitCode::SERVER_ERROR);
    }

    #[test]
    fn test_exit_code_for_timeout() {
        let err = anyhow::Error::from(Error::Timeout {
            operation: "documentation request".to_string(),
            duration_secs: 30,
        });
        assert_eq!(exit_code_for(&err), ExitCode::TIMEOUT);
    }

    #[test]
    fn test_exit_code_for_wrapped_config_error() {
        let result: Result<()> = Err(Error::ConfigError {
            message: "server.port cannot be 0".to_string(),
        })
        .context("invalid configuration");

        assert_eq!(exit_code_for(&result.unwrap_err()), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_exit_code_for_plain_error() {
        let err = anyhow::anyhow!("config file not found: typegen.toml");
        assert_eq!(exit_code_for(&err), ExitCode::ERROR);
    }
}
