//! Identity derivation: certificates to an identity hash, the binary
//! artifact to an independent content hash, both into one record.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::canonical;
use crate::digest::{DigestAlgorithm, Hasher, STREAM_CHUNK_LEN};
use crate::error::DeriveError;
use crate::record::UAppRecord;
use crate::types::HexDigest;

/// Locator for an installed package's binary artifact.
///
/// Holds a path, never an open handle. The deriver opens the file for the
/// duration of the streaming step only and closes it on every exit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryArtifact {
    path: PathBuf,
}

impl BinaryArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Artifact size in bytes, from filesystem metadata.
    pub fn len_bytes(&self) -> Result<u64, DeriveError> {
        let meta = fs::metadata(&self.path).map_err(|e| self.unavailable(e))?;
        Ok(meta.len())
    }

    fn open(&self) -> Result<File, DeriveError> {
        let meta = fs::metadata(&self.path).map_err(|e| self.unavailable(e))?;
        if !meta.is_file() {
            return Err(self.unavailable(std::io::Error::new(
                ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        File::open(&self.path).map_err(|e| self.unavailable(e))
    }

    fn unavailable(&self, source: std::io::Error) -> DeriveError {
        DeriveError::BinaryUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}

/// Cooperative cancellation flag for long-running derivations.
///
/// Clones share the flag. The deriver checks it between streamed chunks, so
/// a watchdog thread holding a clone can impose a deadline on arbitrarily
/// large artifacts.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect at the next chunk boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Derives complete identity records.
///
/// The configured algorithm covers certificate, identity, and binary hashing
/// alike; records produced with different algorithms are not comparable.
#[derive(Debug, Clone)]
pub struct Deriver {
    algorithm: DigestAlgorithm,
}

impl Deriver {
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Derive the identity record for one package.
    ///
    /// `certificates` are raw DER blobs in the platform's stable signature
    /// order; order changes the identity. Any failing sub-step aborts the
    /// whole derivation, so a partial record is never returned.
    pub fn derive(
        &self,
        package_name: &str,
        certificates: &[impl AsRef<[u8]>],
        artifact: &BinaryArtifact,
    ) -> Result<UAppRecord, DeriveError> {
        self.derive_with_cancel(package_name, certificates, artifact, &CancelToken::new())
    }

    /// [`derive`](Self::derive), aborting with [`DeriveError::Cancelled`]
    /// once `cancel` is set.
    pub fn derive_with_cancel(
        &self,
        package_name: &str,
        certificates: &[impl AsRef<[u8]>],
        artifact: &BinaryArtifact,
        cancel: &CancelToken,
    ) -> Result<UAppRecord, DeriveError> {
        if certificates.is_empty() {
            // An identity derived from the bare package name would not
            // detect re-signing.
            return Err(DeriveError::NoCertificates(package_name.to_string()));
        }

        let mut cert_hashes = Vec::with_capacity(certificates.len());
        for (index, blob) in certificates.iter().enumerate() {
            let hash = canonical::certificate_hash(self.algorithm, blob.as_ref()).map_err(|e| {
                DeriveError::MalformedCertificate {
                    index,
                    reason: e.to_string(),
                }
            })?;
            cert_hashes.push(hash);
        }

        let uapp_id = canonical::identity_hash(self.algorithm, package_name, &cert_hashes);
        let binary_hash = self.hash_artifact(artifact, cancel)?;

        Ok(UAppRecord::new(
            package_name,
            artifact.path(),
            binary_hash,
            uapp_id,
        ))
    }

    /// Stream the artifact through the digest in [`STREAM_CHUNK_LEN`]-byte
    /// chunks.
    fn hash_artifact(
        &self,
        artifact: &BinaryArtifact,
        cancel: &CancelToken,
    ) -> Result<HexDigest, DeriveError> {
        let mut reader = BufReader::new(artifact.open()?);
        let mut hasher = Hasher::new(self.algorithm);
        let mut chunk = [0u8; STREAM_CHUNK_LEN];
        loop {
            if cancel.is_cancelled() {
                return Err(DeriveError::Cancelled);
            }
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(DeriveError::Io {
                        path: artifact.path().to_path_buf(),
                        source: e,
                    })
                }
            };
            hasher.update(&chunk[..n]);
        }
        Ok(hasher.finalize())
    }
}

impl Default for Deriver {
    fn default() -> Self {
        Self::new(DigestAlgorithm::default())
    }
}
