//! OpenSpace documentation introspection.
//!
//! Connects to the OpenSpace server module, requests the scripting API
//! documentation, and decodes it into [`typegen_core::ApiDocumentation`]
//! for code generation.
//!
//! The server module speaks a small topic protocol over TCP: each line is
//! a JSON object addressed to a numeric topic. A client opens a topic by
//! sending a message with a `type`, and the server answers on the same
//! topic id.
//!
//! # Examples
//!
//! ```no_run
//! use typegen_core::ServerSettings;
//! use typegen_introspector::{DocumentationSource, ServiceSource};
//!
//! # async fn example() -> typegen_core::Result<()> {
//! let mut source = ServiceSource::new(ServerSettings::default());
//! let docs = source.fetch().await?;
//! println!("{} libraries", docs.library_count());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod client;
pub mod protocol;
pub mod source;

pub use client::DocumentationClient;
pub use source::{DocumentationSource, FileSource, ServiceSource};
