use std::io;

use thiserror::Error;

use crate::domain::submission::DocumentState;

/// Library-wide error type for cwab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Builder operation invoked while the document is in the wrong state.
    #[error("Cannot {operation} while the submission document is {state}")]
    DocumentOrder { operation: &'static str, state: DocumentState },

    /// Destination could not be created or written.
    #[error("Cannot write submission to '{path}': {source}")]
    DestinationUnwritable { path: String, source: io::Error },

    /// Batch config file missing at the requested path.
    #[error("Batch config not found: {0}")]
    ConfigNotFound(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::DestinationUnwritable { source, .. } => source.kind(),
            AppError::DocumentOrder { .. } | AppError::TomlParseError(_) => {
                io::ErrorKind::InvalidInput
            }
            AppError::ConfigNotFound(_) => io::ErrorKind::NotFound,
        }
    }
}
