//! Configuration file handling.
//!
//! Configuration is stored in TOML format at:
//! - Linux: `~/.config/openspace-typegen/config.toml`
//! - macOS: `~/Library/Application Support/openspace-typegen/config.toml`
//! - Windows: `%APPDATA%\openspace-typegen\config.toml`
//!
//! Values are resolved with increasing precedence: built-in defaults, the
//! configuration file, `OPENSPACE_*` environment variables, then
//! command-line flags. The last two are merged by clap before they reach
//! [`apply_server_args`] and [`apply_generate_args`].

use crate::cli::{GenerateArgs, ServerArgs};
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use typegen_core::{GeneratorConfig, ServerSettings};

/// Gets the default configuration file path.
///
/// # Errors
///
/// Returns an error if the platform has no configuration directory.
pub fn default_config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("failed to determine config directory")?;
    Ok(config_dir.join("openspace-typegen").join("config.toml"))
}

/// Returns `explicit` or the default configuration path.
///
/// # Errors
///
/// Returns an error if no path is given and the platform has no
/// configuration directory.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    explicit.map_or_else(default_config_path, |p| Ok(p.to_path_buf()))
}

/// Loads the configuration.
///
/// A missing file at the default location yields the defaults; a missing
/// file that was named explicitly is an error.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    let path = config_path(explicit)?;

    if !path.exists() {
        if explicit.is_some() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        debug!("Config file not found, using defaults");
        return Ok(GeneratorConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Saves the configuration, creating the parent directory.
///
/// The password is never written.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or cannot be written.
pub fn save_config(config: &GeneratorConfig, path: &Path) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("failed to create config directory")?;
    }

    let toml_str = toml::to_string_pretty(config).context("failed to serialize config")?;
    fs::write(path, toml_str).context("failed to write config file")?;

    debug!("Saved config to {}", path.display());
    Ok(())
}

/// Applies connection overrides from flags or environment.
pub fn apply_server_args(settings: &mut ServerSettings, args: &ServerArgs) {
    if let Some(host) = &args.host {
        settings.host.clone_from(host);
    }
    if let Some(port) = args.port {
        settings.port = port;
    }
    if let Some(password) = &args.password {
        settings.password = Some(SecretString::from(password.clone()));
    }
}

/// Applies every `generate` override.
pub fn apply_generate_args(config: &mut GeneratorConfig, args: &GenerateArgs) {
    apply_server_args(&mut config.server, &args.server);

    if let Some(prelude) = &args.prelude {
        config.output.prelude.clone_from(prelude);
    }
    if let Some(output) = &args.output {
        config.output.path.clone_from(output);
    }
    if let Some(namespace) = &args.namespace {
        config.output.namespace.clone_from(namespace);
    }
    if let Some(root_interface) = &args.root_interface {
        config.output.root_interface.clone_from(root_interface);
    }
    if args.strict {
        config.generation.strict = true;
    }
}
