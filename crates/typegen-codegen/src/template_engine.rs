//! Template engine for declaration generation using Handlebars.
//!
//! Wraps Handlebars with the declaration templates pre-registered.
//! Output is TypeScript, not HTML, so values are inserted without
//! escaping. Strict mode turns a missing context field into an error.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let member = engine
//!     .render("declaration/member", &json!({"name": "time"}))
//!     .unwrap();
//! assert_eq!(member, "  time: timeLibrary;\n");
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use typegen_core::{Error, Result};

/// Template name for a single function.
pub const FUNCTION_TEMPLATE: &str = "declaration/function";
/// Template name for a root interface member.
pub const MEMBER_TEMPLATE: &str = "declaration/member";
/// Template name for a library interface.
pub const LIBRARY_TEMPLATE: &str = "declaration/library";
/// Template name for the whole document.
pub const DOCUMENT_TEMPLATE: &str = "declaration/document";

/// Template engine for declaration generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with the declaration templates
    /// registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if a built-in template fails to
    /// parse.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_declaration_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    fn register_declaration_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        let templates = [
            (
                FUNCTION_TEMPLATE,
                include_str!("../templates/declaration/function.d.ts.hbs"),
            ),
            (
                MEMBER_TEMPLATE,
                include_str!("../templates/declaration/member.d.ts.hbs"),
            ),
            (
                LIBRARY_TEMPLATE,
                include_str!("../templates/declaration/library.d.ts.hbs"),
            ),
            (
                DOCUMENT_TEMPLATE,
                include_str!("../templates/declaration/document.d.ts.hbs"),
            ),
        ];

        for (name, source) in templates {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::TemplateError {
                    message: format!("Failed to register {name} template: {e}"),
                })?;
        }

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - A field the template uses is missing from the context
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template, replacing any template of that name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if the template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine
    ///     .register_template_string("custom", "// {{name}}")
    ///     .unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }
}
