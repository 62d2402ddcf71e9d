//! Declaration document assembly.
//!
//! [`DeclarationGenerator`] turns an [`ApiDocumentation`] and the prelude
//! text into the complete declaration file. The document is built in
//! memory; writing it is left to [`crate::output::write_atomic`] so a
//! failure never leaves a half-written file behind.
//!
//! # Examples
//!
//! ```
//! use typegen_codegen::{DeclarationGenerator, GeneratorOptions};
//! use typegen_core::{ApiDocumentation, FunctionDescriptor, LibraryDescriptor};
//!
//! let docs = ApiDocumentation::new(vec![LibraryDescriptor::new(
//!     "time",
//!     vec![FunctionDescriptor::new("UTC", "Current time.", "String")],
//! )]);
//!
//! let generator = DeclarationGenerator::new(GeneratorOptions::default()).unwrap();
//! let content = generator.generate(&docs, "").unwrap();
//!
//! assert!(content.contains("  time: timeLibrary;\n"));
//! assert!(content.contains("  UTC: () => Promise<string>\n"));
//! assert!(content.ends_with("} // namespace OpenSpace\n"));
//! ```

use crate::builtin_types::BUILTIN_TYPES;
use crate::emitter::{function_context, render_function, render_library, render_member};
use crate::template_engine::{DOCUMENT_TEMPLATE, TemplateEngine};
use crate::types::{DocumentContext, FunctionContext};
use crate::typescript::unknown_type_identifiers;
use serde::Serialize;
use typegen_core::{
    ApiDocumentation, DEFAULT_NAMESPACE, DEFAULT_ROOT_INTERFACE, Error, FunctionDescriptor,
    GeneratorConfig, Result,
};

/// Naming and strictness options for generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name of the enclosing namespace
    pub namespace: String,
    /// Name of the root interface
    pub root_interface: String,
    /// Reject type identifiers outside the known vocabulary
    pub strict: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            root_interface: DEFAULT_ROOT_INTERFACE.to_string(),
            strict: false,
        }
    }
}

impl From<&GeneratorConfig> for GeneratorOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            namespace: config.output.namespace.clone(),
            root_interface: config.output.root_interface.clone(),
            strict: config.generation.strict,
        }
    }
}

/// A type identifier that passed through untranslated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnknownTypeUsage {
    /// The identifier as it appears in the output
    pub identifier: String,
    /// Function it was found in, e.g. `navigation.getNavigationState`
    pub location: String,
}

/// A generated document with statistics about what went into it.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedDocument {
    /// Complete declaration file text
    #[serde(skip)]
    pub content: String,
    /// Number of named library interfaces emitted
    pub library_count: usize,
    /// Number of functions emitted, default library included
    pub function_count: usize,
    /// Identifiers passed through in permissive mode
    pub unknown_types: Vec<UnknownTypeUsage>,
}

/// Generator for the TypeScript declaration document.
#[derive(Debug)]
pub struct DeclarationGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl DeclarationGenerator<'_> {
    /// Creates a generator with the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateError`] if template registration fails.
    pub fn new(options: GeneratorOptions) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, options })
    }

    /// Generates the declaration document text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownType`] in strict mode when a type is
    /// outside the known vocabulary, or [`Error::TemplateError`] if
    /// rendering fails.
    pub fn generate(&self, docs: &ApiDocumentation, prelude: &str) -> Result<String> {
        self.render(docs, prelude).map(|document| document.content)
    }

    /// Generates the declaration document together with statistics.
    ///
    /// # Errors
    ///
    /// Same as [`Self::generate`].
    pub fn render(&self, docs: &ApiDocumentation, prelude: &str) -> Result<GeneratedDocument> {
        tracing::info!(
            "Generating declarations for {} libraries, {} functions",
            docs.library_count(),
            docs.function_count()
        );

        let mut unknown_types = Vec::new();
        let mut function_count = 0;

        let mut functions = Vec::new();
        for function in docs.default_functions() {
            functions.push(self.render_checked("", function, &mut unknown_types)?);
            function_count += 1;
        }

        let mut members = Vec::new();
        let mut libraries = Vec::new();
        for library in docs.named_libraries() {
            tracing::debug!(
                "Emitting library '{}' ({} functions)",
                library.library,
                library.functions.len()
            );

            members.push(render_member(&self.engine, &library.library)?);

            let mut rendered = Vec::with_capacity(library.functions.len());
            for function in &library.functions {
                rendered.push(self.render_checked(&library.library, function, &mut unknown_types)?);
                function_count += 1;
            }
            libraries.push(render_library(&self.engine, &library.library, rendered)?);
        }

        let library_count = libraries.len();
        let context = DocumentContext {
            prelude: prelude.to_string(),
            namespace: self.options.namespace.clone(),
            builtin_types: BUILTIN_TYPES.to_string(),
            root_interface: self.options.root_interface.clone(),
            members,
            functions,
            libraries,
        };

        let content = self.engine.render(DOCUMENT_TEMPLATE, &context)?;

        if !unknown_types.is_empty() {
            tracing::warn!(
                "{} type identifiers passed through untranslated",
                unknown_types.len()
            );
        }

        Ok(GeneratedDocument {
            content,
            library_count,
            function_count,
            unknown_types,
        })
    }

    fn render_checked(
        &self,
        library: &str,
        function: &FunctionDescriptor,
        unknown_types: &mut Vec<UnknownTypeUsage>,
    ) -> Result<String> {
        let context = function_context(function);
        let location = if library.is_empty() {
            function.name.clone()
        } else {
            format!("{library}.{}", function.name)
        };

        for identifier in unknown_identifiers(&context) {
            if self.options.strict {
                return Err(Error::UnknownType {
                    identifier,
                    location,
                });
            }

            tracing::warn!("Unknown type '{identifier}' in {location}, passing it through");
            unknown_types.push(UnknownTypeUsage {
                identifier,
                location: location.clone(),
            });
        }

        render_function(&self.engine, &context)
    }
}

fn unknown_identifiers(context: &FunctionContext) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    let types = context
        .parameters
        .iter()
        .map(|p| p.type_name.as_str())
        .chain(std::iter::once(context.return_type.as_str()));

    for type_name in types {
        for identifier in unknown_type_identifiers(type_name) {
            if !found.contains(&identifier) {
                found.push(identifier);
            }
        }
    }
    found
}
