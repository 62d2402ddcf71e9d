//! Template contexts for declaration generation.
//!
//! Each context mirrors one template under `templates/declaration/`.
//! Fields hold text that is already converted to TypeScript; templates
//! only arrange it.

use crate::typescript::Parameter;
use serde::{Deserialize, Serialize};

/// Context for rendering one function signature with its doc comment.
///
/// # Examples
///
/// ```
/// use typegen_codegen::types::FunctionContext;
/// use typegen_codegen::typescript::Parameter;
///
/// let context = FunctionContext {
///     name: "absPath".to_string(),
///     help: "Resolves path tokens.".to_string(),
///     parameters: vec![Parameter::new("path", "string")],
///     return_type: "path".to_string(),
/// };
///
/// assert_eq!(context.parameters.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionContext {
    /// Function name as exposed to scripts
    pub name: String,
    /// Help text, with comment terminators defused
    pub help: String,
    /// Converted parameters in declaration order
    pub parameters: Vec<Parameter>,
    /// Converted return type, without the `Promise<>` wrapper
    pub return_type: String,
}

/// Context for one member of the root interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberContext {
    /// Library name; the member's type is `<name>Library`
    pub name: String,
}

/// Context for rendering a library interface.
///
/// # Examples
///
/// ```
/// use typegen_codegen::types::LibraryContext;
///
/// let context = LibraryContext {
///     name: "navigation".to_string(),
///     functions: vec![],
/// };
///
/// assert!(context.functions.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryContext {
    /// Library name
    pub name: String,
    /// Rendered functions, each ending with a newline
    pub functions: Vec<String>,
}

/// Context for rendering the whole declaration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentContext {
    /// Static prelude copied verbatim
    pub prelude: String,
    /// Name of the enclosing namespace
    pub namespace: String,
    /// Built-in alias declarations
    pub builtin_types: String,
    /// Name of the root interface
    pub root_interface: String,
    /// Rendered root interface members, one per named library
    pub members: Vec<String>,
    /// Rendered functions of the default library
    pub functions: Vec<String>,
    /// Rendered library interfaces
    pub libraries: Vec<String>,
}
