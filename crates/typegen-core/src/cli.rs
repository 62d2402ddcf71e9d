//! CLI-specific types and utilities.
//!
//! Strong types for CLI concepts, shared so that library code can report
//! results in a way the binary can map to exit codes and output formats.
//!
//! # Examples
//!
//! ```
//! use typegen_core::cli::{ExitCode, OutputFormat};
//!
//! let format = OutputFormat::Pretty;
//! assert_eq!(format.as_str(), "pretty");
//!
//! let code = ExitCode::SUCCESS;
//! assert_eq!(code.as_i32(), 0);
//! ```

use std::fmt;
use std::str::FromStr;

/// CLI output format.
///
/// Determines how command results are formatted for user display.
///
/// # Examples
///
/// ```
/// use typegen_core::cli::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// JSON output for machine parsing
    Json,
    /// Plain text output for scripts
    Text,
    /// Human-readable output with colors
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the string representation of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid output format: '{s}' (expected: json, text, or pretty)"
            ))),
        }
    }
}

/// CLI exit code with semantic meaning.
///
/// Success is 0, errors are non-zero with specific meanings.
///
/// # Examples
///
/// ```
/// use typegen_core::cli::ExitCode;
///
/// assert!(ExitCode::SUCCESS.is_success());
/// assert_eq!(ExitCode::SERVER_ERROR.as_i32(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Successful execution (exit code 0).
    pub const SUCCESS: Self = Self(0);

    /// General error (exit code 1).
    pub const ERROR: Self = Self(1);

    /// Invalid input, arguments, or configuration (exit code 2).
    pub const INVALID_INPUT: Self = Self(2);

    /// Documentation service connection or communication error (exit code 3).
    pub const SERVER_ERROR: Self = Self(3);

    /// Connect or request timeout (exit code 4).
    pub const TIMEOUT: Self = Self(4);

    /// Returns the exit code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if the exit code represents success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// Maps a generator error to the exit code reported for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::Error;
    /// use typegen_core::cli::ExitCode;
    ///
    /// let err = Error::Timeout { operation: "connect".to_string(), duration_secs: 5 };
    /// assert_eq!(ExitCode::for_error(&err), ExitCode::TIMEOUT);
    /// ```
    #[must_use]
    pub const fn for_error(error: &crate::Error) -> Self {
        if error.is_timeout() {
            Self::TIMEOUT
        } else if error.is_service_error() {
            Self::SERVER_ERROR
        } else if error.is_config_error()
            || error.is_unknown_type()
            || matches!(error, crate::Error::InvalidArgument(_))
        {
            Self::INVALID_INPUT
        } else {
            Self::ERROR
        }
    }
}

impl Default for ExitCode {
    fn default() -> Self {
        Self::SUCCESS
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_output_format_round_trip() {
        for format in [OutputFormat::Json, OutputFormat::Text, OutputFormat::Pretty] {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_invalid() {
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_exit_code_default_is_success() {
        assert_eq!(ExitCode::default(), ExitCode::SUCCESS);
        assert_eq!(i32::from(ExitCode::ERROR), 1);
    }

    #[test]
    fn test_exit_code_for_errors() {
        let connection = Error::ConnectionFailed {
            address: "localhost:4681".to_string(),
            source: "refused".into(),
        };
        assert_eq!(ExitCode::for_error(&connection), ExitCode::SERVER_ERROR);

        let config = Error::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(ExitCode::for_error(&config), ExitCode::INVALID_INPUT);

        let template = Error::TemplateError {
            message: "bad".to_string(),
        };
        assert_eq!(ExitCode::for_error(&template), ExitCode::ERROR);
    }
}
