//! # UAppID Testkit
//!
//! Testing utilities for UAppID.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known digest and identity answers for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Embedded certificates and on-disk package layouts for test scenarios
//!
//! ## Golden Vectors
//!
//! Golden vectors pin identity derivation so any reimplementation can check itself:
//!
//! ```rust
//! use uappid_testkit::vectors::{derive_identity_from_vector, identity_vectors};
//!
//! for vector in identity_vectors() {
//!     let uapp_id = derive_identity_from_vector(&vector);
//!     println!("{}: {}", vector.name, uapp_id);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use uappid_testkit::generators::{identity_from_params, IdentityParams};
//!
//! proptest! {
//!     #[test]
//!     fn identity_is_deterministic(params: IdentityParams) {
//!         let d1 = identity_from_params(&params);
//!         let d2 = identity_from_params(&params);
//!         prop_assert_eq!(d1, d2);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly stage an installed package on disk:
//!
//! ```rust
//! use uappid_source::CertificateSource;
//! use uappid_testkit::fixtures::{alpha_certificate, InstallFixture};
//!
//! let fixture = InstallFixture::new();
//! fixture.install("com.example.app", &[alpha_certificate()], b"APKDATA");
//!
//! let package = fixture.source.lookup("com.example.app").unwrap();
//! assert_eq!(package.certificates.len(), 1);
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{
    alpha_certificate, beta_certificate, gamma_certificate, installed_package,
    truncated_certificate, InstallFixture,
};
pub use generators::{identity_from_params, IdentityParams};
pub use vectors::{
    derive_identity_from_vector, digest_vectors, fixture_certificate, identity_vectors,
    verify_all_vectors, DigestVector, IdentityVector,
};
