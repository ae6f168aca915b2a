//! Error types for the monitor layer.

use thiserror::Error;
use uappid_core::DeriveError;
use uappid_source::SourceError;

/// Errors that can occur while identifying a package.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Derivation failed after the package was resolved.
    #[error("derivation error: {0}")]
    Derive(#[from] DeriveError),

    /// The package could not be resolved through the source.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// An install event payload that does not name a package.
    #[error("invalid install event: {0:?}")]
    InvalidEvent(String),
}

/// Result type for monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;
