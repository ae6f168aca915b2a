//! Canonical forms feeding the identity digest.
//!
//! The identity string is the package name and the per-certificate digests
//! joined by single spaces. Certificates contribute their canonical DER
//! encoding rather than the raw blob, so the digest tracks the certificate
//! itself and not incidental framing.

use x509_cert::der::{Decode, Encode};
use x509_cert::Certificate;

use crate::digest::DigestAlgorithm;
use crate::types::HexDigest;

/// Delimiter between identity-string fields.
///
/// A space never occurs in a package name or in uppercase hex, so the
/// assembled string is unambiguous.
pub const FIELD_DELIMITER: char = ' ';

/// Parse `blob` as an X.509 certificate and return its canonical DER bytes.
///
/// Input already in canonical DER re-encodes byte-identically.
pub fn canonical_certificate_bytes(blob: &[u8]) -> Result<Vec<u8>, x509_cert::der::Error> {
    let certificate = Certificate::from_der(blob)?;
    certificate.to_der()
}

/// Digest of a certificate's canonical DER encoding.
pub fn certificate_hash(
    algorithm: DigestAlgorithm,
    blob: &[u8],
) -> Result<HexDigest, x509_cert::der::Error> {
    let encoded = canonical_certificate_bytes(blob)?;
    Ok(algorithm.hash(&encoded))
}

/// Assemble the canonical identity string.
///
/// Fields are joined by exactly one [`FIELD_DELIMITER`], no trailing
/// delimiter: `<package_name> <hash1> ... <hashN>`. Certificate order is
/// significant and is the caller's stable signature order.
pub fn identity_string(package_name: &str, cert_hashes: &[HexDigest]) -> String {
    let mut out = String::with_capacity(
        package_name.len()
            + cert_hashes
                .iter()
                .map(|h| h.as_str().len() + 1)
                .sum::<usize>(),
    );
    out.push_str(package_name);
    for hash in cert_hashes {
        out.push(FIELD_DELIMITER);
        out.push_str(hash.as_str());
    }
    out
}

/// Digest of the canonical identity string's UTF-8 bytes.
pub fn identity_hash(
    algorithm: DigestAlgorithm,
    package_name: &str,
    cert_hashes: &[HexDigest],
) -> HexDigest {
    algorithm.hash(identity_string(package_name, cert_hashes).as_bytes())
}
