//! CertificateSource trait: the platform capability boundary.
//!
//! Implementations stand in for whatever mechanism the platform uses to
//! expose installed packages. The deriver itself never spawns processes or
//! scans archives; it consumes exactly what a source yields.

use bytes::Bytes;
use uappid_core::BinaryArtifact;

use crate::error::Result;

/// Everything a derivation needs for one installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledPackage {
    /// Raw DER certificate blobs in the platform's stable signature order.
    /// The order feeds the identity string as-is.
    pub certificates: Vec<Bytes>,
    /// Locator for the package's binary artifact.
    pub artifact: BinaryArtifact,
}

/// The capability through which the platform yields a package's signing
/// certificates and binary location.
///
/// # Design Notes
///
/// - **Resolution only**: a source resolves names to material. It does not
///   validate certificates and does not check that the artifact is readable;
///   a missing binary surfaces later as the deriver's `BinaryUnavailable`.
/// - **Stable order**: `certificates` must come back in the same order on
///   every call for the same installed package.
/// - **Policy lives here**: platform rules about which packages are visible
///   (system packages, work profiles) belong in implementations, not in the
///   deriver.
pub trait CertificateSource: Send + Sync {
    /// Resolve a package name to its certificates and artifact.
    fn lookup(&self, package_name: &str) -> Result<InstalledPackage>;
}

impl<S: CertificateSource + ?Sized> CertificateSource for &S {
    fn lookup(&self, package_name: &str) -> Result<InstalledPackage> {
        (**self).lookup(package_name)
    }
}
