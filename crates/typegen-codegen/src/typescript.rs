//! Conversion of the Lua documentation type grammar to TypeScript.
//!
//! The documentation describes types with a small grammar of its own:
//! a trailing `?` marks an optional argument, a bare `*` a variadic
//! catch-all, `a -> b` a mapping and `(a, b)` a tuple. These functions
//! translate one token at a time. Unanticipated tokens are passed through
//! lower-cased; [`unknown_type_identifiers`] reports them so the caller
//! can decide whether that is acceptable.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::typescript::{convert_argument, convert_return_type};
//! use typegen_core::ArgumentDescriptor;
//!
//! let param = convert_argument(&ArgumentDescriptor::new("name", "String?"));
//! assert_eq!(param.to_string(), "name?: string");
//!
//! assert_eq!(convert_return_type("String -> Integer"), "Map<string, integer>");
//! assert_eq!(convert_return_type(""), "void");
//! ```

use crate::builtin_types::BUILTIN_ALIASES;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use typegen_core::ArgumentDescriptor;

static NIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)nil").expect("valid regex"));
static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*").expect("valid regex"));

/// TypeScript type names that need no declaration.
pub const TYPESCRIPT_PRIMITIVES: &[&str] = &[
    "any",
    "bigint",
    "boolean",
    "never",
    "null",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
    "void",
];

/// Generic types inserted by the converter itself.
const STRUCTURAL_TYPES: &[&str] = &["Map", "Promise"];

/// One rendered function parameter.
///
/// # Examples
///
/// ```
/// use typegen_codegen::typescript::Parameter;
///
/// let param = Parameter::new("...args", "any[]");
/// assert_eq!(param.to_string(), "...args: any[]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, including a trailing `?` when optional
    pub name: String,
    /// TypeScript type expression
    pub type_name: String,
}

impl Parameter {
    /// Creates a parameter from an already converted name and type.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns `true` if the parameter is marked optional.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.name.ends_with('?')
    }

    /// Returns `true` for the `...args` rest parameter.
    #[must_use]
    pub fn is_rest(&self) -> bool {
        self.name.starts_with("...")
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.type_name)
    }
}

/// Converts one documented argument to a TypeScript parameter.
///
/// Rules, in order: a `?` anywhere in the type moves to the name; an
/// unnamed `*` becomes `...args: any[]`; `nil` in any casing becomes
/// `null`; the type is lower-cased.
///
/// # Examples
///
/// ```
/// use typegen_codegen::typescript::convert_argument;
/// use typegen_core::ArgumentDescriptor;
///
/// assert_eq!(
///     convert_argument(&ArgumentDescriptor::new("", "*")).to_string(),
///     "...args: any[]"
/// );
/// assert_eq!(
///     convert_argument(&ArgumentDescriptor::new("value", "String | Nil")).to_string(),
///     "value: string | null"
/// );
/// ```
#[must_use]
pub fn convert_argument(argument: &ArgumentDescriptor) -> Parameter {
    let mut name = argument.name.clone();
    let mut type_name = argument.type_name.clone();

    if type_name.contains('?') {
        name.push('?');
        type_name = type_name.replace('?', "");
    }

    if name.is_empty() && type_name == "*" {
        name = "...args".to_string();
        type_name = "any[]".to_string();
    }

    let type_name = replace_nil(&type_name).to_lowercase();
    Parameter { name, type_name }
}

/// Converts a documented return type to the TypeScript type wrapped by
/// `Promise<...>`.
///
/// Lower-cases the type, renders an empty type as `void`, `a -> b` as
/// `Map<a, b>` and `(a, b)` as the tuple `[a, b]`.
///
/// # Examples
///
/// ```
/// use typegen_codegen::typescript::convert_return_type;
///
/// assert_eq!(convert_return_type("int -> string"), "Map<int, string>");
/// assert_eq!(convert_return_type("(int, string)"), "[int, string]");
/// assert_eq!(convert_return_type("Boolean"), "boolean");
/// ```
#[must_use]
pub fn convert_return_type(return_type: &str) -> String {
    let mut converted = replace_nil(&return_type.to_lowercase());

    if converted.is_empty() {
        converted = "void".to_string();
    }

    if converted.contains("->") {
        let mut parts = converted.split("->").map(str::trim);
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        converted = format!("Map<{key}, {value}>");
    }

    if converted.contains('(') && converted.contains(')') {
        converted = converted.replace('(', "[").replace(')', "]");
    }

    converted
}

/// Replaces every case-insensitive `nil` with `null`.
///
/// # Examples
///
/// ```
/// use typegen_codegen::typescript::replace_nil;
///
/// assert_eq!(replace_nil("Table | NIL"), "Table | null");
/// ```
#[must_use]
pub fn replace_nil(type_name: &str) -> String {
    NIL_REGEX.replace_all(type_name, "null").into_owned()
}

/// Returns `true` if `identifier` is a TypeScript primitive or one of the
/// built-in aliases declared at the top of the namespace.
#[must_use]
pub fn is_known_identifier(identifier: &str) -> bool {
    TYPESCRIPT_PRIMITIVES.contains(&identifier)
        || STRUCTURAL_TYPES.contains(&identifier)
        || BUILTIN_ALIASES.contains(&identifier)
}

/// Lists the identifiers of a converted type expression that are neither
/// primitives nor built-in aliases, in order of appearance without
/// duplicates.
///
/// # Examples
///
/// ```
/// use typegen_codegen::typescript::unknown_type_identifiers;
///
/// assert_eq!(unknown_type_identifiers("Map<string, vec3>"), Vec::<String>::new());
/// assert_eq!(unknown_type_identifiers("[int, renderable]"), vec!["int", "renderable"]);
/// ```
#[must_use]
pub fn unknown_type_identifiers(type_expression: &str) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for found in IDENTIFIER_REGEX.find_iter(type_expression) {
        let identifier = found.as_str();
        if !is_known_identifier(identifier) && !unknown.iter().any(|u| u == identifier) {
            unknown.push(identifier.to_string());
        }
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg(name: &str, type_name: &str) -> String {
        convert_argument(&ArgumentDescriptor::new(name, type_name)).to_string()
    }

    // ========================================================================
    // Argument Conversion Tests
    // ========================================================================

    #[test]
    fn test_plain_argument_is_lowercased() {
        assert_eq!(arg("identifier", "String"), "identifier: string");
        assert_eq!(arg("position", "vec3"), "position: vec3");
    }

    #[test]
    fn test_optional_marker_moves_to_name() {
        assert_eq!(arg("shouldSet", "Boolean?"), "shouldSet?: boolean");
        assert_eq!(arg("x", "Number??"), "x?: number");
    }

    #[test]
    fn test_optional_marker_inside_union() {
        let param = convert_argument(&ArgumentDescriptor::new("v", "(String | Number)?"));
        assert!(param.is_optional());
        assert_eq!(param.type_name, "(string | number)");
    }

    #[test]
    fn test_variadic_argument() {
        let param = convert_argument(&ArgumentDescriptor::new("", "*"));
        assert!(param.is_rest());
        assert_eq!(param.to_string(), "...args: any[]");
    }

    #[test]
    fn test_star_with_name_is_not_variadic() {
        assert_eq!(arg("values", "*"), "values: *");
    }

    #[test]
    fn test_optional_star_is_not_variadic() {
        assert_eq!(arg("", "*?"), "?: *");
    }

    #[test]
    fn test_nil_in_any_casing() {
        assert_eq!(arg("a", "nil"), "a: null");
        assert_eq!(arg("a", "String | Nil"), "a: string | null");
        assert_eq!(arg("a", "NIL"), "a: null");
        assert_eq!(arg("a", "Table | nIl | Path"), "a: table | null | path");
    }

    #[test]
    fn test_optional_nil() {
        assert_eq!(arg("a", "Nil?"), "a?: null");
    }

    // ========================================================================
    // Return Type Conversion Tests
    // ========================================================================

    #[test]
    fn test_empty_return_type_is_void() {
        assert_eq!(convert_return_type(""), "void");
    }

    #[test]
    fn test_map_return_type() {
        assert_eq!(convert_return_type("int -> string"), "Map<int, string>");
        assert_eq!(convert_return_type("String->Table"), "Map<string, table>");
    }

    #[test]
    fn test_map_return_type_ignores_extra_arrows() {
        assert_eq!(convert_return_type("a -> b -> c"), "Map<a, b>");
    }

    #[test]
    fn test_tuple_return_type() {
        assert_eq!(convert_return_type("(int, string)"), "[int, string]");
        assert_eq!(
            convert_return_type("( Translation, SpiceKernel )"),
            "[ translation, spicekernel ]"
        );
    }

    #[test]
    fn test_unbalanced_parenthesis_left_alone() {
        assert_eq!(convert_return_type("(int"), "(int");
    }

    #[test]
    fn test_nil_return_type() {
        assert_eq!(convert_return_type("String | Nil"), "string | null");
    }

    #[test]
    fn test_array_return_type() {
        assert_eq!(convert_return_type("String[]"), "string[]");
    }

    // ========================================================================
    // Vocabulary Tests
    // ========================================================================

    #[test]
    fn test_known_identifiers() {
        assert!(is_known_identifier("string"));
        assert!(is_known_identifier("mat4x4"));
        assert!(is_known_identifier("easingfunction"));
        assert!(is_known_identifier("Map"));
        assert!(!is_known_identifier("String"));
        assert!(!is_known_identifier("renderable"));
    }

    #[test]
    fn test_unknown_identifiers_deduplicated() {
        assert_eq!(
            unknown_type_identifiers("[int, int, string]"),
            vec!["int".to_string()]
        );
    }

    #[test]
    fn test_unknown_identifiers_of_rest_parameter() {
        assert!(unknown_type_identifiers("any[]").is_empty());
        assert!(unknown_type_identifiers("*").is_empty());
    }
}
