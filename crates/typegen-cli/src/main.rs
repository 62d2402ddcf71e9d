//! OpenSpace TypeScript declaration generator.
//!
//! # Examples
//!
//! ```bash
//! # Regenerate declarations from a local OpenSpace instance
//! openspace-typegen generate
//!
//! # Remote instance with a password
//! OPENSPACE_PASSWORD=secret openspace-typegen generate --host 192.168.0.12
//!
//! # Save the documentation, then generate offline
//! openspace-typegen introspect --save docs.json
//! openspace-typegen generate --input docs.json
//! ```

use clap::Parser;
use typegen_cli::{Cli, execute_command, exit_code_for, init_logging};
use typegen_core::cli::{ExitCode, OutputFormat};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let output_format = match cli.format.parse::<OutputFormat>() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(ExitCode::INVALID_INPUT.as_i32());
        }
    };

    if let Err(e) = init_logging(cli.verbose, output_format == OutputFormat::Json) {
        eprintln!("error: failed to initialize logging: {e}");
    }

    let exit_code = match execute_command(cli.command, output_format, cli.config.as_deref()).await
    {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}
