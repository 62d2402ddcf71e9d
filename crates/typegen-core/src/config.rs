//! Configuration types for declaration generation.
//!
//! The configuration groups where the documentation comes from
//! (`server`), where the declaration file goes (`output`), and how
//! permissive type translation is (`generation`). Every section has
//! defaults matching a stock OpenSpace installation, so an empty TOML
//! file is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use typegen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.server.address(), "localhost:4681");
//! assert!(config.validate().is_ok());
//! ```

use crate::{Error, Result};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default documentation service host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default documentation service port.
pub const DEFAULT_PORT: u16 = 4681;

/// Documentation kind requested from the service.
pub const DEFAULT_DOCUMENTATION_KIND: &str = "lua";

/// Default path of the hand-maintained prelude.
pub const DEFAULT_PRELUDE_PATH: &str = "openspace-api-static.txt";

/// Default path of the generated declaration file.
pub const DEFAULT_OUTPUT_PATH: &str = "declaration/openspace-api-js.d.ts";

/// Default enclosing namespace.
pub const DEFAULT_NAMESPACE: &str = "OpenSpace";

/// Default name of the root interface.
pub const DEFAULT_ROOT_INTERFACE: &str = "openspace";

/// Complete generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Documentation service connection settings
    pub server: ServerSettings,

    /// Output file settings
    pub output: OutputSettings,

    /// Type translation settings
    pub generation: GenerationSettings,
}

impl GeneratorConfig {
    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] naming the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.output.validate()
    }
}

/// Connection settings for the documentation service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Host name or IP address
    pub host: String,

    /// TCP port of the server module
    pub port: u16,

    /// Documentation kind to request
    pub documentation: String,

    /// Limit for establishing the TCP connection.
    ///
    /// Default: 10 seconds
    pub connect_timeout_secs: u64,

    /// Limit for each request/response round-trip.
    ///
    /// Default: 30 seconds
    pub request_timeout_secs: u64,

    /// Password for clients that are not allow-listed by the application.
    ///
    /// Never written back out.
    #[serde(skip_serializing)]
    pub password: Option<SecretString>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            documentation: DEFAULT_DOCUMENTATION_KIND.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
            password: None,
        }
    }
}

impl ServerSettings {
    /// Returns `host:port`, with IPv6 hosts in brackets.
    #[must_use]
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Returns the connect timeout as a `Duration`.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the request timeout as a `Duration`.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(config_error("server.host cannot be empty"));
        }
        if self.port == 0 {
            return Err(config_error("server.port cannot be 0"));
        }
        if self.documentation.trim().is_empty() {
            return Err(config_error("server.documentation cannot be empty"));
        }
        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(config_error("server timeouts must be at least 1 second"));
        }
        Ok(())
    }
}

/// Output file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Hand-maintained declarations copied verbatim to the top of the output
    pub prelude: PathBuf,

    /// Generated declaration file, replaced on every run
    pub path: PathBuf,

    /// Enclosing `declare namespace` name
    pub namespace: String,

    /// Name of the interface holding the default library and library members
    pub root_interface: String,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            prelude: PathBuf::from(DEFAULT_PRELUDE_PATH),
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            namespace: DEFAULT_NAMESPACE.to_string(),
            root_interface: DEFAULT_ROOT_INTERFACE.to_string(),
        }
    }
}

impl OutputSettings {
    fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(config_error("output.path cannot be empty"));
        }
        for (field, value) in [
            ("output.namespace", &self.namespace),
            ("output.root_interface", &self.root_interface),
        ] {
            if !is_identifier(value) {
                return Err(config_error(&format!(
                    "{field} must be a TypeScript identifier, got '{value}'"
                )));
            }
        }
        Ok(())
    }
}

/// Type translation settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Fail on type identifiers outside the known vocabulary instead of
    /// passing them through with a warning.
    pub strict: bool,
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn config_error(message: &str) -> Error {
    Error::ConfigError {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 4681);
        assert_eq!(config.server.documentation, "lua");
        assert_eq!(config.output.namespace, "OpenSpace");
        assert_eq!(config.output.root_interface, "openspace");
        assert!(!config.generation.strict);
        assert!(config.server.password.is_none());
    }

    #[test]
    fn test_address_brackets_ipv6_hosts() {
        let mut settings = ServerSettings {
            host: "::1".to_string(),
            ..ServerSettings::default()
        };
        assert_eq!(settings.address(), "[::1]:4681");

        settings.host = "[fe80::1]".to_string();
        assert_eq!(settings.address(), "[fe80::1]:4681");

        settings.host = "192.168.0.12".to_string();
        assert_eq!(settings.address(), "192.168.0.12:4681");
        assert!(settings.address().parse::<std::net::SocketAddr>().is_ok());
    }

    #[test]
    fn test_timeouts() {
        let settings = ServerSettings::default();
        assert_eq!(settings.connect_timeout(), Duration::from_secs(10));
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let mut config = GeneratorConfig::default();
        config.server.port = 0;
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("server.port"));
    }

    #[test]
    fn test_validate_rejects_blank_host() {
        let mut config = GeneratorConfig::default();
        config.server.host = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = GeneratorConfig::default();
        config.server.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_namespace() {
        let mut config = GeneratorConfig::default();
        config.output.namespace = "Open Space".to_string();
        assert!(config.validate().is_err());

        config.output.namespace = "9lives".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_identifier_check() {
        assert!(is_identifier("openspace"));
        assert!(is_identifier("_private$"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }
}
