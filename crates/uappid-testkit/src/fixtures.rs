//! Test fixtures and helpers.
//!
//! Embedded certificates plus common setup code for integration tests. The
//! certificates are self-signed EC P-256 certificates in DER form; their
//! digests are pinned in [`crate::vectors`].

use std::fs;
use std::path::Path;

use bytes::Bytes;
use tempfile::TempDir;

use uappid_core::BinaryArtifact;
use uappid_source::{DirectorySource, InstalledPackage, ARTIFACT_FILE_NAME};

const ALPHA_DER: &[u8] = include_bytes!("../data/alpha.der");
const BETA_DER: &[u8] = include_bytes!("../data/beta.der");
const GAMMA_DER: &[u8] = include_bytes!("../data/gamma.der");

/// First embedded test certificate.
pub fn alpha_certificate() -> Bytes {
    Bytes::from_static(ALPHA_DER)
}

/// Second embedded test certificate.
pub fn beta_certificate() -> Bytes {
    Bytes::from_static(BETA_DER)
}

/// Third embedded test certificate.
pub fn gamma_certificate() -> Bytes {
    Bytes::from_static(GAMMA_DER)
}

/// An unparseable blob: the first half of [`alpha_certificate`].
pub fn truncated_certificate() -> Bytes {
    Bytes::from_static(&ALPHA_DER[..ALPHA_DER.len() / 2])
}

/// A staged package root backed by a temporary directory.
///
/// Packages are laid out the way [`DirectorySource`] reads them; everything
/// is removed when the fixture drops.
pub struct InstallFixture {
    root: TempDir,
    pub source: DirectorySource,
}

impl InstallFixture {
    /// Create an empty package root.
    pub fn new() -> Self {
        let root = TempDir::new().expect("create fixture root");
        let source = DirectorySource::new(root.path());
        Self { root, source }
    }

    /// Stage a package: certificates in the given order, then the artifact.
    pub fn install(&self, package_name: &str, certificates: &[Bytes], artifact: &[u8]) {
        let dir = self.root.path().join(package_name);
        fs::create_dir_all(&dir).expect("create package dir");
        for (index, cert) in certificates.iter().enumerate() {
            fs::write(dir.join(format!("{index:02}-signer.der")), cert)
                .expect("write certificate");
        }
        fs::write(dir.join(ARTIFACT_FILE_NAME), artifact).expect("write artifact");
    }

    /// Remove a staged package's artifact, keeping its certificates.
    pub fn remove_artifact(&self, package_name: &str) {
        fs::remove_file(self.root.path().join(package_name).join(ARTIFACT_FILE_NAME))
            .expect("remove artifact");
    }

    /// The package root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

impl Default for InstallFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an [`InstalledPackage`] whose artifact is written under `dir`.
///
/// For registering packages in a `MemorySource` without a full fixture.
pub fn installed_package(dir: &Path, certificates: Vec<Bytes>, artifact: &[u8]) -> InstalledPackage {
    let path = dir.join(ARTIFACT_FILE_NAME);
    fs::write(&path, artifact).expect("write artifact");
    InstalledPackage {
        certificates,
        artifact: BinaryArtifact::new(path),
    }
}
