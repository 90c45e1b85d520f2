//! Error types for the library layer.

use std::fmt;
use std::path::PathBuf;

/// Errors produced while saving categories, wrapping upstream API errors
/// and adding filesystem and input validation failures.
#[derive(Debug)]
pub enum SaveError {
    /// An error from the underlying API client.
    Api(swapi_api::Error),
    /// Creating the output directory or writing a category file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A category name from the listing cannot be used as a file name.
    InvalidInput(String),
}

impl SaveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Io { path, source } => write!(f, "I/O error on {}: {}", path.display(), source),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for SaveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::InvalidInput(_) => None,
        }
    }
}

impl From<swapi_api::Error> for SaveError {
    fn from(e: swapi_api::Error) -> Self {
        Self::Api(e)
    }
}
