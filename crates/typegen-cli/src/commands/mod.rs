//! Command implementations for the OpenSpace declaration generator.
//!
//! Each command resolves its configuration, performs the operation, and
//! formats output according to the requested format.

pub mod completions;
pub mod config;
pub mod generate;
pub mod introspect;
