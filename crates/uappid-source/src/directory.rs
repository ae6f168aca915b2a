//! Directory-backed implementation of the CertificateSource trait.
//!
//! Lays installed packages out under a root directory, one subdirectory per
//! package:
//!
//! ```text
//! <root>/com.example.app/
//!     00-signer.der     certificate files, any *.der, file-name order
//!     base.apk          the binary artifact
//! ```
//!
//! Useful on development hosts and in integration tests, where package
//! material is staged on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use uappid_core::BinaryArtifact;

use crate::error::{Result, SourceError};
use crate::traits::{CertificateSource, InstalledPackage};

/// File name of the binary artifact inside a package directory.
pub const ARTIFACT_FILE_NAME: &str = "base.apk";

/// Extension of certificate files inside a package directory.
pub const CERTIFICATE_EXTENSION: &str = "der";

/// Filesystem-backed package registry rooted at one directory.
///
/// Certificates come back sorted by file name, which gives every lookup of
/// the same package the same order.
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CertificateSource for DirectorySource {
    fn lookup(&self, package_name: &str) -> Result<InstalledPackage> {
        // A name with path structure cannot be an installed package and must
        // not escape the root.
        if package_name.is_empty()
            || package_name == ".."
            || package_name.contains(std::path::is_separator)
        {
            return Err(SourceError::PackageNotFound(package_name.to_string()));
        }

        let dir = self.root.join(package_name);
        if !dir.is_dir() {
            return Err(SourceError::PackageNotFound(package_name.to_string()));
        }

        let entries = fs::read_dir(&dir).map_err(|e| SourceError::Io {
            path: dir.clone(),
            source: e,
        })?;

        let mut cert_paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::Io {
                path: dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext == CERTIFICATE_EXTENSION)
            {
                cert_paths.push(path);
            }
        }
        cert_paths.sort();

        let mut certificates = Vec::with_capacity(cert_paths.len());
        for path in cert_paths {
            let blob = fs::read(&path).map_err(|e| SourceError::Io {
                path: path.clone(),
                source: e,
            })?;
            certificates.push(Bytes::from(blob));
        }

        let artifact = BinaryArtifact::new(dir.join(ARTIFACT_FILE_NAME));
        Ok(InstalledPackage {
            certificates,
            artifact,
        })
    }
}
