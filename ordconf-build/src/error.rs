use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while rendering or writing a configuration module.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A template parameter is not usable as a Rust identifier.
    #[error("invalid {field} name `{value}`: expected a Rust identifier")]
    InvalidIdentifier { field: &'static str, value: String },

    /// The configurable type would shadow an item of the generated module.
    #[error("configurable name `{value}` collides with a generated item")]
    ReservedName { value: String },

    /// The rendered tokens did not form a valid Rust file.
    #[error("failed to format generated source: {0}")]
    Format(#[from] syn::Error),

    /// The output directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The generated file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GenerateError {
    pub(crate) fn invalid_identifier(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            field,
            value: value.into(),
        }
    }
}
