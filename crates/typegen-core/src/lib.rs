//! Core types, configuration, and errors for OpenSpace declaration generation.
//!
//! This crate provides the foundational types shared by the introspector,
//! the code generator, and the command-line interface.
//!
//! # Architecture
//!
//! The core consists of:
//! - The scripting API data model (`ApiDocumentation`, `LibraryDescriptor`, ...)
//! - Error hierarchy with contextual information
//! - Generator configuration with validated defaults
//! - CLI strong types (`ExitCode`, `OutputFormat`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod api;
mod config;
mod error;

pub mod cli;

pub use api::{ApiDocumentation, ArgumentDescriptor, FunctionDescriptor, LibraryDescriptor};
pub use config::{
    DEFAULT_DOCUMENTATION_KIND, DEFAULT_HOST, DEFAULT_NAMESPACE, DEFAULT_OUTPUT_PATH,
    DEFAULT_PORT, DEFAULT_PRELUDE_PATH, DEFAULT_ROOT_INTERFACE, GenerationSettings,
    GeneratorConfig, OutputSettings, ServerSettings,
};
pub use error::{Error, Result};
