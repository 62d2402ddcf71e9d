//! Config command implementation.
//!
//! Writes, shows, and locates the configuration file described in
//! [`crate::config`].

use crate::actions::ConfigAction;
use crate::config::{config_path, load_config, save_config};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;
use typegen_core::GeneratorConfig;
use typegen_core::cli::{ExitCode, OutputFormat};

/// Result of `config init`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InitResult {
    /// Whether a file was written
    pub success: bool,
    /// Human-readable status
    pub message: String,
    /// Configuration file path
    pub path: String,
}

/// Runs a configuration action.
///
/// `explicit` is the `--config` path, if any.
///
/// # Errors
///
/// Returns an error if the configuration cannot be read, written, or
/// formatted.
pub fn run(
    action: &ConfigAction,
    explicit: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    info!("Config action: {action:?}");

    match action {
        ConfigAction::Init { force } => {
            let result = init_config(explicit, *force)?;
            println!("{}", format_output(&result, output_format)?);
        }
        ConfigAction::Show => {
            let config = load_config(explicit)?;
            let formatted =
                format_output(&config, output_format).context("failed to format configuration")?;
            println!("{formatted}");
        }
        ConfigAction::Path => {
            println!("{}", config_path(explicit)?.display());
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Writes a configuration file with default values.
///
/// An existing file is left untouched unless `force` is set.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn init_config(explicit: Option<&Path>, force: bool) -> Result<InitResult> {
    let path = config_path(explicit)?;

    if path.exists() && !force {
        return Ok(InitResult {
            success: false,
            message: "configuration file already exists (use --force to overwrite)".to_string(),
            path: path.display().to_string(),
        });
    }

    save_config(&GeneratorConfig::default(), &path)?;

    Ok(InitResult {
        success: true,
        message: "configuration file created with default values".to_string(),
        path: path.display().to_string(),
    })
}
