//! Data model of the OpenSpace scripting API documentation.
//!
//! These types mirror the JSON document returned by the `documentation`
//! topic for the `lua` kind. They are read-only snapshots: the generator
//! only reads and re-serializes them.
//!
//! # Examples
//!
//! ```
//! use typegen_core::ApiDocumentation;
//! use serde_json::json;
//!
//! let docs = ApiDocumentation::from_value(json!([
//!     {
//!         "library": "",
//!         "functions": [
//!             {"name": "absPath", "help": "", "arguments": [], "returnType": "Path"}
//!         ]
//!     }
//! ]))
//! .unwrap();
//!
//! assert_eq!(docs.function_count(), 1);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One argument of a scripting function.
///
/// `type_name` uses the scripting type grammar: a `?` marks an optional
/// argument and a bare `*` with an empty name marks a variadic tail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    /// Argument name, possibly empty
    pub name: String,
    /// Type expression in the scripting grammar
    #[serde(rename = "type")]
    pub type_name: String,
}

impl ArgumentDescriptor {
    /// Creates an argument descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// One function of a scripting library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    /// Function name as exposed to scripts
    pub name: String,
    /// Free-form help text; empty when the service omits it
    #[serde(default)]
    pub help: String,
    /// Ordered argument list
    pub arguments: Vec<ArgumentDescriptor>,
    /// Return type in the scripting grammar, empty for no value
    #[serde(rename = "returnType")]
    pub return_type: String,
}

impl FunctionDescriptor {
    /// Creates a function descriptor without arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use typegen_core::{ArgumentDescriptor, FunctionDescriptor};
    ///
    /// let function = FunctionDescriptor::new("setPause", "Pauses time.", "")
    ///     .with_argument(ArgumentDescriptor::new("isPaused", "Boolean"));
    /// assert_eq!(function.arguments.len(), 1);
    /// ```
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        help: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            help: help.into(),
            arguments: Vec::new(),
            return_type: return_type.into(),
        }
    }

    /// Appends an argument, returning the updated descriptor.
    #[must_use]
    pub fn with_argument(mut self, argument: ArgumentDescriptor) -> Self {
        self.arguments.push(argument);
        self
    }
}

/// A named group of functions.
///
/// The library with an empty name is the default library: its functions
/// live directly on the root `openspace` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDescriptor {
    /// Library name, empty for the default library
    pub library: String,
    /// Functions in source order
    pub functions: Vec<FunctionDescriptor>,
}

impl LibraryDescriptor {
    /// Creates a library descriptor.
    #[must_use]
    pub fn new(library: impl Into<String>, functions: Vec<FunctionDescriptor>) -> Self {
        Self {
            library: library.into(),
            functions,
        }
    }

    /// Returns `true` for the nameless default library.
    #[inline]
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.library.is_empty()
    }
}

/// The complete scripting API description, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiDocumentation {
    libraries: Vec<LibraryDescriptor>,
}

/// Object form of the documentation payload.
#[derive(Deserialize)]
struct WrappedPayload {
    data: Vec<LibraryDescriptor>,
}

impl ApiDocumentation {
    /// Creates documentation from an ordered list of libraries.
    #[must_use]
    pub const fn new(libraries: Vec<LibraryDescriptor>) -> Self {
        Self { libraries }
    }

    /// Decodes a documentation payload.
    ///
    /// Accepts either a bare array of libraries or an object carrying the
    /// array under `data`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the payload has neither shape
    /// or a library/function record is missing a required field.
    pub fn from_value(value: Value) -> Result<Self> {
        // Decode the array directly first so field-level errors keep their detail.
        if value.is_array() {
            let libraries: Vec<LibraryDescriptor> =
                serde_json::from_value(value).map_err(|e| Error::SerializationError {
                    message: format!("invalid documentation payload: {e}"),
                    source: Some(e),
                })?;
            return Ok(Self::new(libraries));
        }

        match serde_json::from_value::<WrappedPayload>(value) {
            Ok(WrappedPayload { data }) => {
                tracing::debug!("Decoded wrapped documentation payload");
                Ok(Self::new(data))
            }
            Err(e) => Err(Error::SerializationError {
                message: format!(
                    "documentation payload is neither a library list nor {{\"data\": [...]}}: {e}"
                ),
                source: Some(e),
            }),
        }
    }

    /// Decodes a documentation dump from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationError`] if the text is not JSON or the
    /// payload has an unexpected shape.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| Error::SerializationError {
            message: format!("documentation dump is not valid JSON: {e}"),
            source: Some(e),
        })?;
        Self::from_value(value)
    }

    /// Returns all libraries in service order.
    #[inline]
    #[must_use]
    pub fn libraries(&self) -> &[LibraryDescriptor] {
        &self.libraries
    }

    /// Returns named libraries in service order, skipping the default one.
    pub fn named_libraries(&self) -> impl Iterator<Item = &LibraryDescriptor> {
        self.libraries.iter().filter(|library| !library.is_default())
    }

    /// Returns the first nameless library, if any.
    #[must_use]
    pub fn default_library(&self) -> Option<&LibraryDescriptor> {
        self.libraries.iter().find(|library| library.is_default())
    }

    /// Returns the functions emitted on the root interface.
    ///
    /// If the service reports more than one nameless library, their
    /// functions are concatenated in service order.
    pub fn default_functions(&self) -> impl Iterator<Item = &FunctionDescriptor> {
        self.libraries
            .iter()
            .filter(|library| library.is_default())
            .flat_map(|library| library.functions.iter())
    }

    /// Returns the number of libraries, including the default one.
    #[inline]
    #[must_use]
    pub fn library_count(&self) -> usize {
        self.libraries.len()
    }

    /// Returns the total number of functions across all libraries.
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.libraries.iter().map(|library| library.functions.len()).sum()
    }

    /// Returns `true` if the documentation has no libraries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
