//! # UAppID Core
//!
//! Pure primitives for deriving a stable, content-derived identifier for an
//! installed application package.
//!
//! This crate contains no platform integration and no storage. Its only I/O
//! is streaming the binary artifact it is handed a path to.
//!
//! ## Key Types
//!
//! - [`Deriver`] - Turns a package name, certificates, and a binary artifact
//!   into a [`UAppRecord`]
//! - [`UAppRecord`] - The immutable derived identity
//! - [`HexDigest`] - Uppercase fixed-width hex rendering of a digest
//! - [`DigestAlgorithm`] - The digest family used across one derivation
//!
//! ## Canonicalization
//!
//! Each certificate contributes its canonical DER encoding; the identity
//! string joins the package name and certificate digests with single spaces.
//! See the [`canonical`] module.

pub mod canonical;
pub mod derive;
pub mod digest;
pub mod error;
pub mod record;
pub mod types;

pub use canonical::{
    canonical_certificate_bytes, certificate_hash, identity_hash, identity_string,
    FIELD_DELIMITER,
};
pub use derive::{BinaryArtifact, CancelToken, Deriver};
pub use digest::{DigestAlgorithm, Hasher, STREAM_CHUNK_LEN};
pub use error::{DeriveError, UnsupportedAlgorithm};
pub use record::UAppRecord;
pub use types::HexDigest;
