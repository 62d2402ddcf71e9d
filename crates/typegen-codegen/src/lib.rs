//! TypeScript declaration generation for the OpenSpace scripting API.
//!
//! Translates an [`ApiDocumentation`](typegen_core::ApiDocumentation) into
//! a `.d.ts` file: a static prelude, a block of built-in type aliases, a
//! root interface holding the default library's functions and one member
//! per named library, and one interface per named library.
//!
//! # Architecture
//!
//! - [`typescript`]: type-grammar converter (`String?`, `*`, `a -> b`, ...)
//! - [`emitter`]: function, member and library rendering
//! - [`generator`]: whole-document assembly with the unknown-type policy
//! - [`output`]: atomic file replacement
//! - [`template_engine`]: Handlebars templates under `templates/declaration/`
//!
//! # Examples
//!
//! ```no_run
//! use typegen_codegen::{DeclarationGenerator, GeneratorOptions, write_atomic};
//! use typegen_core::ApiDocumentation;
//! use std::path::Path;
//!
//! # fn example(docs: ApiDocumentation) -> typegen_core::Result<()> {
//! let prelude = std::fs::read_to_string("openspace-api-static.txt").unwrap_or_default();
//! let generator = DeclarationGenerator::new(GeneratorOptions::default())?;
//! let content = generator.generate(&docs, &prelude)?;
//! write_atomic(Path::new("declaration/openspace-api-js.d.ts"), &content)?;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builtin_types;
pub mod emitter;
pub mod generator;
pub mod output;
pub mod template_engine;
pub mod types;
pub mod typescript;

pub use generator::{DeclarationGenerator, GeneratedDocument, GeneratorOptions, UnknownTypeUsage};
pub use output::write_atomic;
pub use template_engine::TemplateEngine;
