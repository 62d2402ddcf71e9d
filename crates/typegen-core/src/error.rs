//! Error types for OpenSpace declaration generation.
//!
//! This module provides the error hierarchy used by every crate in the
//! workspace. Variants carry enough context to produce an actionable
//! message without a backtrace.
//!
//! # Examples
//!
//! ```
//! use typegen_core::{Error, Result};
//!
//! fn check_port(port: u16) -> Result<u16> {
//!     if port == 0 {
//!         return Err(Error::ConfigError {
//!             message: "port cannot be 0".to_string(),
//!         });
//!     }
//!     Ok(port)
//! }
//!
//! let err = check_port(0).unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for declaration generation.
///
/// All fallible operations in the workspace return this type, which keeps
/// error handling uniform between the library crates and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Connection to the documentation service failed.
    ///
    /// Raised when the TCP connection cannot be established or drops
    /// before a response arrives.
    #[error("documentation service connection failed: {address}")]
    ConnectionFailed {
        /// `host:port` of the service
        address: String,
        /// Underlying error cause
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The service rejected the supplied password.
    #[error("authentication rejected by {address}")]
    AuthenticationFailed {
        /// `host:port` of the service
        address: String,
    },

    /// The service sent something that does not follow the topic protocol.
    #[error("protocol error: {message}")]
    ProtocolError {
        /// Description of the unexpected message
        message: String,
    },

    /// Timeout error.
    ///
    /// Occurs when a connect or request round-trip exceeds its limit.
    #[error("Operation timed out after {duration_secs}s: {operation}")]
    Timeout {
        /// Name of the operation that timed out
        operation: String,
        /// Duration in seconds before timeout occurred
        duration_secs: u64,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when a documentation payload or dump does not have the
    /// expected shape.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Filesystem error bound to the path that caused it.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File or directory involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid or contains contradictory
    /// settings.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Invalid argument error.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A type identifier outside the known vocabulary, in strict mode.
    #[error("unknown type '{identifier}' in {location}")]
    UnknownType {
        /// The unrecognized identifier
        identifier: String,
        /// Where it was found, e.g. `navigation.setCameraState`
        location: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a connection error.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Error;
    ///
    /// let err = Error::ConnectionFailed {
    ///     address: "localhost:4681".to_string(),
    ///     source: "connection refused".into(),
    /// };
    /// assert!(err.is_connection_error());
    /// ```
    #[must_use]
    pub const fn is_connection_error(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. })
    }

    /// Returns `true` if the service rejected authentication.
    #[must_use]
    pub const fn is_authentication_error(&self) -> bool {
        matches!(self, Self::AuthenticationFailed { .. })
    }

    /// Returns `true` if this is a protocol error.
    #[must_use]
    pub const fn is_protocol_error(&self) -> bool {
        matches!(self, Self::ProtocolError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid port".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a timeout error.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Error;
    ///
    /// let err = Error::Timeout {
    ///     operation: "connect".to_string(),
    ///     duration_secs: 10,
    /// };
    /// assert!(err.is_timeout());
    /// ```
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if a strict-mode type check failed.
    #[must_use]
    pub const fn is_unknown_type(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    /// Returns `true` for errors caused by talking to the service.
    ///
    /// Covers connection, authentication, and protocol failures, but not
    /// timeouts, which callers usually report separately.
    #[must_use]
    pub const fn is_service_error(&self) -> bool {
        self.is_connection_error() || self.is_authentication_error() || self.is_protocol_error()
    }
}

/// Result type alias for generator operations.
///
/// # Examples
///
/// ```
/// use typegen_core::{Result, Error};
///
/// fn validate_input(value: i32) -> Result<i32> {
///     if value < 0 {
///         return Err(Error::InvalidArgument("negative".to_string()));
///     }
///     Ok(value)
/// }
///
/// assert!(validate_input(5).is_ok());
/// assert!(validate_input(-1).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
