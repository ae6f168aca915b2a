//! The derived identity record.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::HexDigest;

/// A complete derived identity for one installed package.
///
/// Records are immutable: they are assembled in one step once every field is
/// known, so a partially-populated record cannot exist. Two records compare
/// equal exactly when the package carried the same name, certificates, and
/// binary contents under the same digest algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UAppRecord {
    package_name: String,
    apk_path: PathBuf,
    binary_hash: HexDigest,
    uapp_id: HexDigest,
}

impl UAppRecord {
    /// Assemble a record from derivation results.
    pub fn new(
        package_name: impl Into<String>,
        apk_path: impl Into<PathBuf>,
        binary_hash: HexDigest,
        uapp_id: HexDigest,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            apk_path: apk_path.into(),
            binary_hash,
            uapp_id,
        }
    }

    /// Canonical package identifier, e.g. `com.example.app`.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Filesystem location of the binary artifact the record was derived
    /// from. A path only, never an open handle.
    pub fn apk_path(&self) -> &Path {
        &self.apk_path
    }

    /// Digest of the artifact's full contents.
    pub fn binary_hash(&self) -> &HexDigest {
        &self.binary_hash
    }

    /// The package's content-derived identifier: the digest of the
    /// canonical identity string.
    pub fn uapp_id(&self) -> &HexDigest {
        &self.uapp_id
    }
}
