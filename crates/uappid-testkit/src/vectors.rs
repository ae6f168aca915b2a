//! Golden test vectors for deterministic verification.
//!
//! These vectors pin digest rendering and identity derivation so any
//! reimplementation can check itself against known answers. Identity
//! vectors are defined over the embedded fixture certificates.

use bytes::Bytes;

use uappid_core::{certificate_hash, identity_hash, DigestAlgorithm, HexDigest};

use crate::fixtures::{alpha_certificate, beta_certificate, gamma_certificate};

/// SHA-256 of [`alpha_certificate`]'s canonical DER bytes.
pub const ALPHA_SHA256: &str = "11B467E521FC8E1EAA92AB6419C15603C4A5E364A58287A17E9351FE48748266";
/// SHA-256 of [`beta_certificate`]'s canonical DER bytes.
pub const BETA_SHA256: &str = "1F166E7C7901713799C913FC0A1C3DBCD389F3873DBE4FD0458326E5B507AD00";
/// SHA-256 of [`gamma_certificate`]'s canonical DER bytes.
pub const GAMMA_SHA256: &str = "C36826F5E215FFAA32F9AAEABFC61F83B075158EC5842CD82865AA2D12F05B6F";
/// SHA-1 of [`alpha_certificate`]'s canonical DER bytes.
pub const ALPHA_SHA1: &str = "5AC61353AD9D1BF75A22A88D5997B006A34835E6";

/// A digest known-answer vector.
#[derive(Debug, Clone)]
pub struct DigestVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Algorithm under test.
    pub algorithm: DigestAlgorithm,
    /// Input bytes.
    pub input: &'static [u8],
    /// Expected uppercase hex digest.
    pub expected: &'static str,
}

/// All digest known-answer vectors.
pub fn digest_vectors() -> Vec<DigestVector> {
    vec![
        DigestVector {
            name: "sha1 empty input",
            algorithm: DigestAlgorithm::Sha1,
            input: b"",
            expected: "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709",
        },
        DigestVector {
            name: "sha1 abc",
            algorithm: DigestAlgorithm::Sha1,
            input: b"abc",
            expected: "A9993E364706816ABA3E25717850C26C9CD0D89D",
        },
        DigestVector {
            name: "sha1 artifact bytes",
            algorithm: DigestAlgorithm::Sha1,
            input: b"APKDATA",
            expected: "7450B3C6D98DC5C1AD1508FF2C29C17FD50762EC",
        },
        DigestVector {
            // Digest starts with a zero byte; pins the fixed-width rendering.
            name: "sha1 leading zero byte",
            algorithm: DigestAlgorithm::Sha1,
            input: b"pkg-124",
            expected: "009C30A42CC59E381C4C70F8B309E65606C618EB",
        },
        DigestVector {
            name: "sha256 empty input",
            algorithm: DigestAlgorithm::Sha256,
            input: b"",
            expected: "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855",
        },
        DigestVector {
            name: "sha256 abc",
            algorithm: DigestAlgorithm::Sha256,
            input: b"abc",
            expected: "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD",
        },
        DigestVector {
            name: "sha256 hello",
            algorithm: DigestAlgorithm::Sha256,
            input: b"hello",
            expected: "2CF24DBA5FB0A30E26E83B2AC5B9E29E1B161E5C1FA7425E73043362938B9824",
        },
        DigestVector {
            name: "sha256 artifact bytes",
            algorithm: DigestAlgorithm::Sha256,
            input: b"APKDATA",
            expected: "2CE76B4E9335982D523A05F17324D2C129E5E72B57B111D93A38A8C8689A9ED3",
        },
        DigestVector {
            name: "sha256 leading zero byte",
            algorithm: DigestAlgorithm::Sha256,
            input: b"pkg-233",
            expected: "0037AC1DFFA4A61694A61867F117B5A85055675DCE5FAF8E0FF8D588181639A2",
        },
        DigestVector {
            name: "sha512 empty input",
            algorithm: DigestAlgorithm::Sha512,
            input: b"",
            expected: "CF83E1357EEFB8BDF1542850D66D8007D620E4050B5715DC83F4A921D36CE9CE\
                       47D0D13C5D85F2B0FF8318D2877EEC2F63B931BD47417A81A538327AF927DA3E",
        },
        DigestVector {
            name: "sha512 abc",
            algorithm: DigestAlgorithm::Sha512,
            input: b"abc",
            expected: "DDAF35A193617ABACC417349AE20413112E6FA4E89A97EA20A9EEEE64B55D39A\
                       2192992A274FC1A836BA3C23A3FEEBBD454D4423643CE80E2A9AC94FA54CA49F",
        },
        DigestVector {
            name: "sha512 artifact bytes",
            algorithm: DigestAlgorithm::Sha512,
            input: b"APKDATA",
            expected: "F7F91BF45976061E08931D891F5981E9EF559BE0536C7341C1B954464D32D182\
                       3C251AE35B701FA332F689B753F7536BE2C272CC1B5D88F9556C39C636D5352D",
        },
        DigestVector {
            name: "blake3 empty input",
            algorithm: DigestAlgorithm::Blake3,
            input: b"",
            expected: "AF1349B9F5F9A1A6A0404DEA36DCC9499BCB25C9ADC112B7CC9A93CAE41F3262",
        },
    ]
}

/// An identity known-answer vector over the embedded certificates.
#[derive(Debug, Clone)]
pub struct IdentityVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Algorithm for certificate, identity, and binary hashing alike.
    pub algorithm: DigestAlgorithm,
    /// Package name fed into the identity string.
    pub package_name: &'static str,
    /// Fixture certificates by name, in identity order.
    pub certificates: &'static [&'static str],
    /// Expected UAppID.
    pub expected_uapp_id: &'static str,
}

/// All identity known-answer vectors.
pub fn identity_vectors() -> Vec<IdentityVector> {
    vec![
        IdentityVector {
            name: "single certificate",
            algorithm: DigestAlgorithm::Sha256,
            package_name: "com.example.app",
            certificates: &["alpha"],
            expected_uapp_id: "86635A667A0A7D3B3C305AE24E07C6D66F6706D7EE9888F15A290D476BCB3479",
        },
        IdentityVector {
            name: "two certificates",
            algorithm: DigestAlgorithm::Sha256,
            package_name: "com.example.app",
            certificates: &["alpha", "beta"],
            expected_uapp_id: "E04AE27662D761ECC01A5D150995AF945415ED69B6DEA67BC66CDC26D66E8FBE",
        },
        IdentityVector {
            // Same certificates as "two certificates", reversed order.
            name: "two certificates swapped",
            algorithm: DigestAlgorithm::Sha256,
            package_name: "com.example.app",
            certificates: &["beta", "alpha"],
            expected_uapp_id: "4A2C04779F75BC691E9690EEBCD0050CC33F5D56988B2CAEE98C539F61C69D9D",
        },
        IdentityVector {
            name: "three certificates",
            algorithm: DigestAlgorithm::Sha256,
            package_name: "com.example.app",
            certificates: &["alpha", "beta", "gamma"],
            expected_uapp_id: "A4342B9D6EBFC37C6D4B0AD8E824AE28FE5E5D08850AEFDE9A4B692986345BDE",
        },
        IdentityVector {
            // Same certificate as "single certificate", different name.
            name: "renamed package",
            algorithm: DigestAlgorithm::Sha256,
            package_name: "org.example.other",
            certificates: &["alpha"],
            expected_uapp_id: "50A92F3DCDCAB950B0CC2A4B2690B7E4B88481738842725FB41D4C8750F23291",
        },
        IdentityVector {
            name: "sha1 compatibility mode",
            algorithm: DigestAlgorithm::Sha1,
            package_name: "com.example.app",
            certificates: &["alpha"],
            expected_uapp_id: "4B124EC7A6FDA0F8DEF33376864F4556CFE1DBE3",
        },
    ]
}

/// Resolve a fixture certificate by name.
pub fn fixture_certificate(name: &str) -> Bytes {
    match name {
        "alpha" => alpha_certificate(),
        "beta" => beta_certificate(),
        "gamma" => gamma_certificate(),
        other => panic!("unknown fixture certificate: {other}"),
    }
}

/// Compute the UAppID an identity vector describes.
pub fn derive_identity_from_vector(vector: &IdentityVector) -> HexDigest {
    let cert_hashes: Vec<_> = vector
        .certificates
        .iter()
        .map(|name| {
            certificate_hash(vector.algorithm, &fixture_certificate(name))
                .expect("fixture certificate parses")
        })
        .collect();
    identity_hash(vector.algorithm, vector.package_name, &cert_hashes)
}

/// Verify every vector, returning `(name, passed, actual)` triples.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let digests = digest_vectors().into_iter().map(|v| {
        let actual = v.algorithm.hash(v.input);
        let passed = actual.as_str() == v.expected;
        (v.name.to_string(), passed, actual.to_string())
    });

    let identities = identity_vectors().into_iter().map(|v| {
        let actual = derive_identity_from_vector(&v);
        let passed = actual.as_str() == v.expected_uapp_id;
        (v.name.to_string(), passed, actual.to_string())
    });

    digests.chain(identities).collect()
}
