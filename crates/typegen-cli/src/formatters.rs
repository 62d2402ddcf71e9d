//! Output formatters for CLI commands.
//!
//! Every command result goes through [`format_output`] so that `--format`
//! behaves the same everywhere: `json` for machines, `text` for one-line
//! script consumption, `pretty` for terminals.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use typegen_core::cli::OutputFormat;

/// Format data according to the specified output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use typegen_cli::formatters::format_output;
/// use typegen_core::cli::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Summary {
///     libraries: usize,
/// }
///
/// let output = format_output(&Summary { libraries: 25 }, OutputFormat::Json)?;
/// assert!(output.contains("\"libraries\": 25"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::format(data),
        OutputFormat::Text => text::format(data),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// JSON output formatting.
pub mod json {
    use super::{Result, Serialize};

    /// Format data as JSON with 2-space indentation.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format data as compact single-line JSON.
    pub fn format_compact<T: Serialize>(data: &T) -> Result<String> {
        Ok(serde_json::to_string(data)?)
    }
}

/// Plain text output formatting.
pub mod text {
    use super::{Result, Serialize, json};

    /// Format data as compact JSON, without colors.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        json::format_compact(data)
    }
}

/// Pretty (human-readable) output formatting.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Format data as an indented, colorized `key: value` listing.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out.trim_end().to_string())
    }

    fn write_value(out: &mut String, value: &Value, indent: usize) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Object(map) => {
                for (key, val) in map {
                    if is_scalar(val) {
                        out.push_str(&format!("{pad}{}: {}\n", key.blue().bold(), scalar(val)));
                    } else {
                        out.push_str(&format!("{pad}{}:\n", key.blue().bold()));
                        write_value(out, val, indent + 1);
                    }
                }
            }
            Value::Array(items) if items.is_empty() => {
                out.push_str(&format!("{pad}{}\n", "(none)".dimmed()));
            }
            Value::Array(items) => {
                for item in items {
                    if is_scalar(item) {
                        out.push_str(&format!("{pad}- {}\n", scalar(item)));
                    } else {
                        out.push_str(&format!("{pad}-\n"));
                        write_value(out, item, indent + 1);
                    }
                }
            }
            other => out.push_str(&format!("{pad}{}\n", scalar(other))),
        }
    }

    const fn is_scalar(value: &Value) -> bool {
        !matches!(value, Value::Object(_) | Value::Array(_))
    }

    fn scalar(value: &Value) -> String {
        match value {
            Value::Null => "null".dimmed().to_string(),
            Value::Bool(b) => b.to_string().yellow().to_string(),
            Value::Number(n) => n.to_string().cyan().to_string(),
            Value::String(s) => s.green().to_string(),
            Value::Array(_) | Value::Object(_) => value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct LibrarySummary {
        name: String,
        function_count: usize,
    }

    #[derive(Serialize)]
    struct Summary {
        source: String,
        strict: bool,
        libraries: Vec<LibrarySummary>,
    }

    fn summary() -> Summary {
        Summary {
            source: "service at localhost:4681".to_string(),
            strict: false,
            libraries: vec![LibrarySummary {
                name: "time".to_string(),
                function_count: 12,
            }],
        }
    }

    #[test]
    fn test_json_format() {
        let output = json::format(&summary()).unwrap();
        assert!(output.contains("\"source\": \"service at localhost:4681\""));
        assert!(output.contains("\"function_count\": 12"));
    }

    #[test]
    fn test_text_format_is_single_line() {
        let output = text::format(&summary()).unwrap();
        assert!(!output.contains('\n'));
        assert!(output.contains("\"name\":\"time\""));
    }

    #[test]
    fn test_pretty_format_lists_nested_values() {
        colored::control::set_override(false);
        let output = pretty::format(&summary()).unwrap();

        assert!(output.contains("source: service at localhost:4681"));
        assert!(output.contains("strict: false"));
        assert!(output.contains("libraries:\n  -\n    name: time\n    function_count: 12"));
    }

    #[test]
    fn test_pretty_format_keeps_field_order() {
        colored::control::set_override(false);

        #[derive(Serialize)]
        struct Counts {
            source: String,
            library_count: usize,
            function_count: usize,
        }

        let output = pretty::format(&Counts {
            source: "dump docs.json".to_string(),
            library_count: 2,
            function_count: 3,
        })
        .unwrap();
        assert_eq!(
            output,
            "source: dump docs.json\nlibrary_count: 2\nfunction_count: 3"
        );
    }

    #[test]
    fn test_pretty_format_empty_array() {
        colored::control::set_override(false);

        #[derive(Serialize)]
        struct Empty {
            items: Vec<u8>,
        }

        let output = pretty::format(&Empty { items: vec![] }).unwrap();
        assert_eq!(output, "items:\n  (none)");
    }

    #[test]
    fn test_format_output_dispatch() {
        assert!(format_output(&summary(), OutputFormat::Json).unwrap().contains('\n'));
        assert!(!format_output(&summary(), OutputFormat::Text).unwrap().contains('\n'));
        assert!(format_output(&summary(), OutputFormat::Pretty).unwrap().contains("time"));
    }
}
