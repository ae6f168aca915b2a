//! Proptest generators for property-based testing.

use bytes::Bytes;
use proptest::prelude::*;

use uappid_core::{certificate_hash, identity_hash, DigestAlgorithm, HexDigest};

use crate::fixtures::{alpha_certificate, beta_certificate, gamma_certificate};

/// Generate a digest algorithm.
pub fn algorithm() -> impl Strategy<Value = DigestAlgorithm> {
    prop_oneof![
        Just(DigestAlgorithm::Sha1),
        Just(DigestAlgorithm::Sha256),
        Just(DigestAlgorithm::Sha512),
        Just(DigestAlgorithm::Blake3),
    ]
}

/// Generate a dotted package name like `com.example.app`.
pub fn package_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,8}(\\.[a-z][a-z0-9]{0,8}){1,3}".prop_map(String::from)
}

/// Generate payload bytes of specified max length.
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate one of the embedded fixture certificates.
pub fn certificate() -> impl Strategy<Value = Bytes> {
    prop_oneof![
        Just(alpha_certificate()),
        Just(beta_certificate()),
        Just(gamma_certificate()),
    ]
}

/// Generate a non-empty, ordered set of distinct fixture certificates.
pub fn certificate_set() -> impl Strategy<Value = Vec<Bytes>> {
    let all = vec![alpha_certificate(), beta_certificate(), gamma_certificate()];
    prop::sample::subsequence(all, 1..=3).prop_shuffle()
}

/// Generate a digest of random bytes under a random algorithm.
pub fn hex_digest() -> impl Strategy<Value = HexDigest> {
    (algorithm(), payload(64)).prop_map(|(algo, data)| algo.hash(&data))
}

/// Parameters for deriving an identity.
#[derive(Debug, Clone)]
pub struct IdentityParams {
    pub algorithm: DigestAlgorithm,
    pub package_name: String,
    pub certificates: Vec<Bytes>,
}

impl Arbitrary for IdentityParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (algorithm(), package_name(), certificate_set())
            .prop_map(|(algorithm, package_name, certificates)| IdentityParams {
                algorithm,
                package_name,
                certificates,
            })
            .boxed()
    }
}

/// Derive the identity digest described by parameters.
pub fn identity_from_params(params: &IdentityParams) -> HexDigest {
    let hashes: Vec<_> = params
        .certificates
        .iter()
        .map(|cert| {
            certificate_hash(params.algorithm, cert).expect("fixture certificate parses")
        })
        .collect();
    identity_hash(params.algorithm, &params.package_name, &hashes)
}
