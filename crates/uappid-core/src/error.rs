//! Error types for UAppID derivation.

use std::path::PathBuf;

use thiserror::Error;

/// A digest algorithm name that is not compiled into this build.
///
/// Surfaces where an algorithm name enters from configuration; the set of
/// algorithms is fixed at compile time, so this is a configuration error
/// rather than a data error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported digest algorithm: {name}")]
pub struct UnsupportedAlgorithm {
    /// The name as it appeared in configuration.
    pub name: String,
}

/// Errors that can occur while deriving a package identity.
///
/// Every variant aborts the derivation; no partial record is ever returned.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error(transparent)]
    UnsupportedAlgorithm(#[from] UnsupportedAlgorithm),

    #[error("malformed certificate at index {index}: {reason}")]
    MalformedCertificate { index: usize, reason: String },

    #[error("no certificates supplied for package {0}")]
    NoCertificates(String),

    #[error("binary unavailable at {}: {source}", .path.display())]
    BinaryUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read failed while hashing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("derivation cancelled")]
    Cancelled,
}
