//! Error types for the argmark crate.

use thiserror::Error;

/// Errors that can occur while describing a schema or binding arguments.
///
/// Malformed values (`--age abc` for an integer field) are not errors: the
/// binder leaves such fields at their prior value.
#[derive(Debug, Error)]
pub enum ArgError {
    /// The schema or its target cannot be used for parsing.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A required argument had no value after flag and positional matching.
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(String),

    /// The target slot cannot hold the declared value type.
    #[error("unsupported type for field {name}: {type_name}")]
    UnsupportedFieldType {
        name: String,
        type_name: &'static str,
    },

    /// The help template failed to render.
    #[error("help rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    /// Help or version output could not be written.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl ArgError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ArgError::InvalidSchema(msg.into())
    }
}

/// Result type for argmark operations.
pub type Result<T> = std::result::Result<T, ArgError>;
