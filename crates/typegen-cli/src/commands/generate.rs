//! Generate command implementation.
//!
//! Fetches the scripting API documentation, renders the declaration file,
//! and atomically replaces the output. The output file is only touched once
//! the whole document has been rendered, so a failed fetch leaves any
//! previous declarations in place.

use crate::cli::GenerateArgs;
use crate::config::{apply_generate_args, load_config};
use crate::formatters::format_output;
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use typegen_codegen::{DeclarationGenerator, GeneratorOptions, UnknownTypeUsage, write_atomic};
use typegen_core::cli::{ExitCode, OutputFormat};
use typegen_core::{Error, GeneratorConfig};
use typegen_introspector::{DocumentationSource, FileSource, ServiceSource};

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    /// Where the documentation came from
    pub source: String,
    /// Written declaration file
    pub output_path: PathBuf,
    /// Named library interfaces emitted
    pub library_count: usize,
    /// Functions declared
    pub function_count: usize,
    /// Type identifiers outside the known vocabulary
    pub unknown_types: Vec<UnknownTypeUsage>,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the documentation
/// cannot be fetched, the prelude cannot be read, strict mode rejects a
/// type, or the output cannot be written.
///
/// # Examples
///
/// ```no_run
/// use typegen_cli::cli::GenerateArgs;
/// use typegen_cli::commands::generate;
/// use typegen_core::cli::OutputFormat;
///
/// # async fn example() -> anyhow::Result<()> {
/// let exit_code = generate::run(GenerateArgs::default(), None, OutputFormat::Pretty).await?;
/// assert!(exit_code.is_success());
/// # Ok(())
/// # }
/// ```
pub async fn run(
    args: GenerateArgs,
    config_path: Option<&Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let mut config = load_config(config_path)?;
    apply_generate_args(&mut config, &args);
    config.validate()?;

    let mut source: Box<dyn DocumentationSource> = match &args.input {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ServiceSource::new(config.server.clone())),
    };

    let result = generate(source.as_mut(), &config).await?;

    if output_format == OutputFormat::Pretty {
        println!(
            "{} Saved in {}",
            "Successfully generated types file.".green(),
            result.output_path.display()
        );
    } else {
        println!("{}", format_output(&result, output_format)?);
    }

    Ok(ExitCode::SUCCESS)
}

/// Fetches from `source` and writes the declaration file described by
/// `config`.
///
/// # Errors
///
/// Returns an error if any step fails; the output file is not modified in
/// that case.
pub async fn generate(
    source: &mut dyn DocumentationSource,
    config: &GeneratorConfig,
) -> Result<GenerationResult> {
    let origin = source.describe();
    info!("Fetching documentation from {origin}");

    let docs = source
        .fetch()
        .await
        .with_context(|| format!("failed to fetch documentation from {origin}"))?;
    debug!(
        "Fetched {} libraries with {} functions",
        docs.library_count(),
        docs.function_count()
    );

    let prelude_path = &config.output.prelude;
    let prelude = tokio::fs::read_to_string(prelude_path)
        .await
        .map_err(|e| Error::Io {
            path: prelude_path.clone(),
            source: e,
        })
        .context("failed to read prelude")?;

    let generator = DeclarationGenerator::new(GeneratorOptions::from(config))?;
    let document = generator.render(&docs, &prelude)?;

    write_atomic(&config.output.path, &document.content)
        .context("failed to write declaration file")?;
    info!("Wrote {}", config.output.path.display());

    Ok(GenerationResult {
        source: origin,
        output_path: config.output.path.clone(),
        library_count: document.library_count,
        function_count: document.function_count,
        unknown_types: document.unknown_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use tempfile::TempDir;
    use typegen_core::{
        ApiDocumentation, ArgumentDescriptor, FunctionDescriptor, LibraryDescriptor,
    };

    /// Yields fixed documentation, or a connection failure for `None`.
    struct FixedSource(Option<ApiDocumentation>);

    #[async_trait]
    impl DocumentationSource for FixedSource {
        async fn fetch(&mut self) -> typegen_core::Result<ApiDocumentation> {
            self.0.clone().ok_or_else(|| Error::ConnectionFailed {
                address: "localhost:4681".to_string(),
                source: "connection refused".into(),
            })
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn documentation() -> ApiDocumentation {
        ApiDocumentation::new(vec![LibraryDescriptor::new(
            "time",
            vec![
                FunctionDescriptor::new("setPause", "Pauses the simulation.", "")
                    .with_argument(ArgumentDescriptor::new("pause", "Boolean")),
                FunctionDescriptor::new("currentTime", "Returns the time.", "Number"),
            ],
        )])
    }

    fn config_in(dir: &TempDir) -> GeneratorConfig {
        let prelude = dir.path().join("static.txt");
        fs::write(&prelude, "// prelude\n").unwrap();

        let mut config = GeneratorConfig::default();
        config.output.prelude = prelude;
        config.output.path = dir.path().join("declaration").join("api.d.ts");
        config
    }

    #[tokio::test]
    async fn test_generate_writes_declarations() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let result = generate(&mut FixedSource(Some(documentation())), &config)
            .await
            .unwrap();

        assert_eq!(result.library_count, 1);
        assert_eq!(result.function_count, 2);
        assert!(result.unknown_types.is_empty());

        let written = fs::read_to_string(&config.output.path).unwrap();
        assert!(written.starts_with("// prelude\n"));
        assert!(written.contains("  time: timeLibrary;\n"));
        assert!(written.contains("  setPause: (pause: boolean) => Promise<void>\n"));
        assert!(written.contains("  currentTime: () => Promise<number>\n"));
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_previous_output() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        fs::create_dir_all(config.output.path.parent().unwrap()).unwrap();
        fs::write(&config.output.path, "previous").unwrap();

        let err = generate(&mut FixedSource(None), &config).await.unwrap_err();

        assert!(err.to_string().contains("failed to fetch documentation"));
        assert_eq!(fs::read_to_string(&config.output.path).unwrap(), "previous");
    }

    #[tokio::test]
    async fn test_missing_prelude_is_io_error() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.output.prelude = dir.path().join("missing.txt");

        let err = generate(&mut FixedSource(Some(documentation())), &config)
            .await
            .unwrap_err();

        let core = err.chain().find_map(|e| e.downcast_ref::<Error>()).unwrap();
        assert!(matches!(core, Error::Io { .. }));
        assert!(!config.output.path.exists());
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unknown_type() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.generation.strict = true;

        let docs = ApiDocumentation::new(vec![LibraryDescriptor::new(
            "scene",
            vec![FunctionDescriptor::new("node", "Returns a node.", "SceneGraphNode")],
        )]);
        let err = generate(&mut FixedSource(Some(docs)), &config)
            .await
            .unwrap_err();

        let core = err.chain().find_map(|e| e.downcast_ref::<Error>()).unwrap();
        assert!(core.is_unknown_type());
        assert!(!config.output.path.exists());
    }

    #[tokio::test]
    async fn test_run_from_dump_file() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let dump = dir.path().join("docs.json");
        fs::write(&dump, serde_json::to_string(&documentation()).unwrap()).unwrap();

        let args = GenerateArgs {
            input: Some(dump),
            prelude: Some(config.output.prelude.clone()),
            output: Some(config.output.path.clone()),
            ..GenerateArgs::default()
        };
        let config_file = dir.path().join("config.toml");
        fs::write(&config_file, "").unwrap();

        let code = run(args, Some(&config_file), OutputFormat::Json).await.unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
        assert!(config.output.path.exists());
    }
}
