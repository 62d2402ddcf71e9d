//! Command-line definition.

use crate::actions::ConfigAction;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// OpenSpace TypeScript declaration generator.
///
/// Fetches the Lua scripting API documentation from a running OpenSpace
/// instance and writes a `.d.ts` file describing it.
#[derive(Parser, Debug)]
#[command(name = "openspace-typegen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "OPENSPACE_TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the TypeScript declaration file.
    ///
    /// Connects to OpenSpace (or reads a saved dump with `--input`),
    /// renders the declarations and atomically replaces the output file.
    ///
    /// # Examples
    ///
    /// ```bash
    /// openspace-typegen generate
    /// openspace-typegen generate --host 192.168.0.12 --output types/openspace.d.ts
    /// openspace-typegen generate --input docs.json --strict
    /// ```
    Generate(GenerateArgs),

    /// Fetch the documentation and summarize it.
    ///
    /// # Examples
    ///
    /// ```bash
    /// openspace-typegen introspect
    /// openspace-typegen introspect --save docs.json
    /// ```
    Introspect(IntrospectArgs),

    /// Manage the configuration file.
    Config {
        /// Configuration action to perform
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Documentation service connection overrides.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerArgs {
    /// Host running OpenSpace
    #[arg(long, env = "OPENSPACE_HOST")]
    pub host: Option<String>,

    /// Port of the OpenSpace server module
    #[arg(long, env = "OPENSPACE_PORT")]
    pub port: Option<u16>,

    /// Password, when this machine is not allow-listed
    #[arg(long, env = "OPENSPACE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

/// Arguments of `generate`.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Connection overrides
    #[command(flatten)]
    pub server: ServerArgs,

    /// Prelude copied verbatim to the top of the output
    #[arg(long, env = "OPENSPACE_PRELUDE")]
    pub prelude: Option<PathBuf>,

    /// Declaration file to write
    #[arg(short, long, env = "OPENSPACE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Read the documentation from a dump saved with `introspect --save`
    /// instead of connecting
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Name of the enclosing namespace
    #[arg(long)]
    pub namespace: Option<String>,

    /// Name of the root interface
    #[arg(long)]
    pub root_interface: Option<String>,

    /// Fail on type names outside the known vocabulary
    #[arg(long)]
    pub strict: bool,
}

/// Arguments of `introspect`.
#[derive(Args, Debug, Clone, Default)]
pub struct IntrospectArgs {
    /// Connection overrides
    #[command(flatten)]
    pub server: ServerArgs,

    /// Save the raw documentation as JSON for later `generate --input`
    #[arg(long)]
    pub save: Option<PathBuf>,
}
