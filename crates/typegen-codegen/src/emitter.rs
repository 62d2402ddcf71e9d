//! Emitters for functions, root interface members and library interfaces.
//!
//! Emission preserves input order; nothing is sorted.

use crate::template_engine::{FUNCTION_TEMPLATE, LIBRARY_TEMPLATE, MEMBER_TEMPLATE, TemplateEngine};
use crate::types::{FunctionContext, LibraryContext, MemberContext};
use crate::typescript::{convert_argument, convert_return_type};
use typegen_core::{FunctionDescriptor, Result};

/// Defuses comment terminators so help text cannot close the doc comment.
///
/// # Examples
///
/// ```
/// use typegen_codegen::emitter::sanitize_help;
///
/// assert_eq!(sanitize_help("Matches a/*/b"), "Matches a/* /b");
/// assert_eq!(sanitize_help("plain"), "plain");
/// ```
#[must_use]
pub fn sanitize_help(help: &str) -> String {
    help.replace("*/", "* /")
}

/// Converts a documented function into its template context.
#[must_use]
pub fn function_context(function: &FunctionDescriptor) -> FunctionContext {
    FunctionContext {
        name: function.name.clone(),
        help: sanitize_help(&function.help),
        parameters: function.arguments.iter().map(convert_argument).collect(),
        return_type: convert_return_type(&function.return_type),
    }
}

/// Renders one function with its doc comment.
///
/// # Errors
///
/// Returns [`typegen_core::Error::TemplateError`] if rendering fails.
pub fn render_function(engine: &TemplateEngine<'_>, context: &FunctionContext) -> Result<String> {
    engine.render(FUNCTION_TEMPLATE, context)
}

/// Renders the root interface member that points at a library interface.
///
/// # Errors
///
/// Returns [`typegen_core::Error::TemplateError`] if rendering fails.
pub fn render_member(engine: &TemplateEngine<'_>, library: &str) -> Result<String> {
    engine.render(
        MEMBER_TEMPLATE,
        &MemberContext {
            name: library.to_string(),
        },
    )
}

/// Renders a library interface from already rendered functions.
///
/// # Errors
///
/// Returns [`typegen_core::Error::TemplateError`] if rendering fails.
pub fn render_library(
    engine: &TemplateEngine<'_>,
    library: &str,
    functions: Vec<String>,
) -> Result<String> {
    engine.render(
        LIBRARY_TEMPLATE,
        &LibraryContext {
            name: library.to_string(),
            functions,
        },
    )
}
