//! # UAppID Source
//!
//! The platform capability boundary for UAppID. The deriver in
//! `uappid-core` consumes certificates and an artifact path; this crate
//! defines the [`CertificateSource`] trait through which a platform supplies
//! them, plus two implementations.
//!
//! ## Key Types
//!
//! - [`CertificateSource`] - Resolves a package name to its material
//! - [`InstalledPackage`] - Certificates plus artifact locator
//! - [`MemorySource`] - In-memory registry for tests and embedders
//! - [`DirectorySource`] - Directory layout for development hosts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uappid_source::{CertificateSource, DirectorySource};
//!
//! let source = DirectorySource::new("/var/lib/uappid/packages");
//! let package = source.lookup("com.example.app").unwrap();
//! assert!(!package.certificates.is_empty());
//! ```

pub mod directory;
pub mod error;
pub mod memory;
pub mod traits;

pub use directory::{DirectorySource, ARTIFACT_FILE_NAME, CERTIFICATE_EXTENSION};
pub use error::{Result, SourceError};
pub use memory::MemorySource;
pub use traits::{CertificateSource, InstalledPackage};
