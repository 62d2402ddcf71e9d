//! Introspect command implementation.
//!
//! Fetches the documentation from a running OpenSpace instance and
//! summarizes it. With `--save`, the raw documentation is written as JSON
//! so that `generate --input` can later run without the application.

use crate::cli::IntrospectArgs;
use crate::config::{apply_server_args, load_config};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use typegen_codegen::write_atomic;
use typegen_core::ApiDocumentation;
use typegen_core::cli::{ExitCode, OutputFormat};
use typegen_introspector::{DocumentationSource, ServiceSource};

/// Summary of one library.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LibrarySummary {
    /// Library name, empty for the default library
    pub name: String,
    /// Number of functions
    pub function_count: usize,
}

/// Result of an introspection run.
#[derive(Debug, Clone, Serialize)]
pub struct IntrospectionResult {
    /// Where the documentation came from
    pub source: String,
    /// Libraries, default one included
    pub library_count: usize,
    /// Functions across all libraries
    pub function_count: usize,
    /// Per-library summary in service order
    pub libraries: Vec<LibrarySummary>,
    /// Dump written with `--save`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<PathBuf>,
}

impl IntrospectionResult {
    /// Summarizes `docs`.
    #[must_use]
    pub fn from_documentation(source: String, docs: &ApiDocumentation) -> Self {
        Self {
            source,
            library_count: docs.library_count(),
            function_count: docs.function_count(),
            libraries: docs
                .libraries()
                .iter()
                .map(|library| LibrarySummary {
                    name: library.library.clone(),
                    function_count: library.functions.len(),
                })
                .collect(),
            saved_to: None,
        }
    }
}

/// Runs the introspect command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the service cannot be
/// reached, or the dump cannot be written.
pub async fn run(
    args: IntrospectArgs,
    config_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;
    apply_server_args(&mut config.server, &args.server);
    config.validate()?;

    let mut source = ServiceSource::new(config.server);
    let result = introspect(&mut source, args.save.as_deref()).await?;

    let formatted = format_output(&result, output_format)?;
    println!("{formatted}");

    Ok(ExitCode::SUCCESS)
}

/// Fetches from `source`, optionally saving the documentation to `save`.
///
/// # Errors
///
/// Returns an error if fetching or saving fails.
pub async fn introspect(
    source: &mut dyn DocumentationSource,
    save: Option<&Path>,
) -> Result<IntrospectionResult> {
    let origin = source.describe();
    info!("Introspecting {origin}");

    let docs = source
        .fetch()
        .await
        .with_context(|| format!("failed to fetch documentation from {origin}"))?;

    let mut result = IntrospectionResult::from_documentation(origin, &docs);

    if let Some(path) = save {
        let json = serde_json::to_string_pretty(&docs)?;
        write_atomic(path, &json).context("failed to save documentation")?;
        info!("Saved documentation to {}", path.display());
        result.saved_to = Some(path.to_path_buf());
    }

    Ok(result)
}
