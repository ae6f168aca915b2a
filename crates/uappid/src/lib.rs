//! # UAppID
//!
//! A stable, content-derived identifier for installed application packages.
//!
//! ## Overview
//!
//! A package's UAppID is the digest of its canonical identity string: the
//! package name followed by the digest of each signing certificate, joined
//! by single spaces. Alongside it, the binary artifact is hashed on its own.
//! Together the two values detect the changes that matter:
//!
//! - **Re-signing**: different certificates change the UAppID even when the
//!   name and binary stay the same
//! - **Binary tampering**: a modified artifact changes the binary hash even
//!   when the identity is untouched
//! - **Impersonation**: the same name signed by someone else never maps to
//!   the same UAppID
//!
//! ## Key Concepts
//!
//! - **Record**: Immutable. Derivation either yields a complete
//!   [`UAppRecord`] or a typed error, never a partial value.
//! - **Source**: The platform capability. Certificates and the artifact
//!   path come from a [`CertificateSource`] implementation.
//! - **Determinism**: Same name, certificates, and bytes always produce the
//!   same record, on any host.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bytes::Bytes;
//! use uappid::{BinaryArtifact, InstalledPackage, MemorySource, PackageMonitor};
//!
//! let source = MemorySource::new();
//! source.insert(
//!     "com.example.app",
//!     InstalledPackage {
//!         certificates: vec![Bytes::from(std::fs::read("signer.der").unwrap())],
//!         artifact: BinaryArtifact::new("/data/app/com.example.app/base.apk"),
//!     },
//! );
//!
//! let monitor = PackageMonitor::new(source);
//! let record = monitor.handle_event("package:com.example.app").unwrap();
//! println!("{} -> {}", record.package_name(), record.uapp_id());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `uappid::core` - Derivation primitives (digests, canonical forms)
//! - `uappid::source` - The certificate-source capability and backends

pub mod error;
pub mod event;
pub mod monitor;

// Re-export component crates
pub use uappid_core as core;
pub use uappid_source as source;

// Re-export main types for convenience
pub use error::{MonitorError, Result};
pub use event::{InstallEvent, PACKAGE_PREFIX};
pub use monitor::{MonitorConfig, PackageMonitor};

// Re-export commonly used component types
pub use uappid_core::{
    BinaryArtifact, CancelToken, DeriveError, Deriver, DigestAlgorithm, HexDigest, UAppRecord,
    UnsupportedAlgorithm,
};
pub use uappid_source::{
    CertificateSource, DirectorySource, InstalledPackage, MemorySource, SourceError,
};
