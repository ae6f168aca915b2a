//! In-memory implementation of the CertificateSource trait.
//!
//! Primarily for tests and for embedders that gather package material
//! through their own channels. Thread-safe via RwLock.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Result, SourceError};
use crate::traits::{CertificateSource, InstalledPackage};

/// In-memory package registry.
///
/// All entries are lost when the source is dropped.
pub struct MemorySource {
    inner: RwLock<HashMap<String, InstalledPackage>>,
}

impl MemorySource {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Register or replace a package.
    pub fn insert(&self, package_name: impl Into<String>, package: InstalledPackage) {
        self.inner
            .write()
            .unwrap()
            .insert(package_name.into(), package);
    }

    /// Remove a package, returning its material if it was present.
    pub fn remove(&self, package_name: &str) -> Option<InstalledPackage> {
        self.inner.write().unwrap().remove(package_name)
    }
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new()
    }
}

impl CertificateSource for MemorySource {
    fn lookup(&self, package_name: &str) -> Result<InstalledPackage> {
        self.inner
            .read()
            .unwrap()
            .get(package_name)
            .cloned()
            .ok_or_else(|| SourceError::PackageNotFound(package_name.to_string()))
    }
}
