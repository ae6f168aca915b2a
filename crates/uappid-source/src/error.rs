//! Error types for certificate sources.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while resolving a package through a source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// No installed package with this name.
    #[error("package not found: {0}")]
    PackageNotFound(String),

    /// Filesystem failure while gathering package material.
    #[error("i/o error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
