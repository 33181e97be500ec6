//! Error types for theme builds
//!
//! Two families of failure exist: the theme source could not be loaded, or
//! the output file could not be read or written. Neither is recovered from.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading, rendering or writing a theme
#[derive(Debug, Error)]
pub enum BuildError {
    /// Theme source file could not be read
    #[error("failed to read theme source {}: {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Theme source file is not valid JSON/TOML
    #[error("failed to parse theme source {}: {reason}", .path.display())]
    ParseSource { path: PathBuf, reason: String },

    /// Theme source has an extension we cannot load
    #[error("unsupported theme source format {} (expected .json or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Theme source parsed, but its root is not an object
    #[error("theme source {} must contain an object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("failed to write theme output {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing output file could not be read (freshness check)
    #[error("failed to read theme output {}: {source}", .path.display())]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BuildError {
    /// Whether this error happened while loading the theme source
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            BuildError::ReadSource { .. }
                | BuildError::ParseSource { .. }
                | BuildError::UnsupportedFormat { .. }
                | BuildError::NotAnObject { .. }
        )
    }

    /// Whether this error came from the output file
    pub fn is_filesystem_error(&self) -> bool {
        matches!(
            self,
            BuildError::WriteOutput { .. } | BuildError::ReadOutput { .. }
        )
    }
}
