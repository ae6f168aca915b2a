//! Digest primitives for identity derivation.
//!
//! All digests render through [`HexDigest`] as uppercase hex with a fixed
//! width per algorithm. One [`DigestAlgorithm`] instance covers certificate
//! hashing, identity hashing, and binary hashing within a derivation;
//! identifiers are only comparable when derived with the same algorithm.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;
use std::io::{ErrorKind, Read};
use std::str::FromStr;

use crate::error::UnsupportedAlgorithm;
use crate::types::HexDigest;

/// Chunk size for streamed hashing, in bytes.
pub const STREAM_CHUNK_LEN: usize = 1024;

/// Digest algorithms available for identity derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DigestAlgorithm {
    /// SHA-1. Kept for compatibility with identifiers minted by earlier
    /// derivers; not collision-resistant.
    Sha1,
    /// SHA-256, the default.
    #[default]
    Sha256,
    /// SHA-512.
    Sha512,
    /// BLAKE3 with its default 32-byte output.
    Blake3,
}

impl DigestAlgorithm {
    /// Every available algorithm.
    pub const ALL: [Self; 4] = [Self::Sha1, Self::Sha256, Self::Sha512, Self::Blake3];

    /// Digest width in bytes.
    pub const fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha512 => 64,
            Self::Blake3 => 32,
        }
    }

    /// Width of the rendered hex form.
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Canonical algorithm name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha256 => "SHA-256",
            Self::Sha512 => "SHA-512",
            Self::Blake3 => "BLAKE3",
        }
    }

    /// One-shot digest of `data`.
    pub fn hash(self, data: &[u8]) -> HexDigest {
        let mut hasher = Hasher::new(self);
        hasher.update(data);
        hasher.finalize()
    }

    /// Digest a reader without materializing its contents.
    ///
    /// Reads [`STREAM_CHUNK_LEN`]-byte chunks into the incremental state.
    /// An empty reader yields the same digest as `hash(b"")`.
    pub fn hash_reader<R: Read>(self, reader: &mut R) -> std::io::Result<HexDigest> {
        let mut hasher = Hasher::new(self);
        let mut chunk = [0u8; STREAM_CHUNK_LEN];
        loop {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&chunk[..n]);
        }
        Ok(hasher.finalize())
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnsupportedAlgorithm;

    /// Case-insensitive; accepts names with or without the hyphen.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha512" | "sha-512" => Ok(Self::Sha512),
            "blake3" => Ok(Self::Blake3),
            _ => Err(UnsupportedAlgorithm {
                name: s.to_string(),
            }),
        }
    }
}

/// Incremental digest state.
///
/// Zero updates produce the digest of the empty byte string.
pub struct Hasher {
    inner: Inner,
}

enum Inner {
    Sha1(Sha1),
    Sha256(Sha256),
    Sha512(Sha512),
    Blake3(blake3::Hasher),
}

impl Hasher {
    /// Fresh state for `algorithm`.
    pub fn new(algorithm: DigestAlgorithm) -> Self {
        let inner = match algorithm {
            DigestAlgorithm::Sha1 => Inner::Sha1(Sha1::new()),
            DigestAlgorithm::Sha256 => Inner::Sha256(Sha256::new()),
            DigestAlgorithm::Sha512 => Inner::Sha512(Sha512::new()),
            DigestAlgorithm::Blake3 => Inner::Blake3(blake3::Hasher::new()),
        };
        Self { inner }
    }

    /// Absorb a chunk.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.inner {
            Inner::Sha1(h) => h.update(data),
            Inner::Sha256(h) => h.update(data),
            Inner::Sha512(h) => h.update(data),
            Inner::Blake3(h) => {
                h.update(data);
            }
        }
    }

    /// Consume the state and render the digest.
    pub fn finalize(self) -> HexDigest {
        match self.inner {
            Inner::Sha1(h) => HexDigest::from_bytes(h.finalize()),
            Inner::Sha256(h) => HexDigest::from_bytes(h.finalize()),
            Inner::Sha512(h) => HexDigest::from_bytes(h.finalize()),
            Inner::Blake3(h) => HexDigest::from_bytes(h.finalize().as_bytes()),
        }
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self.inner {
            Inner::Sha1(_) => DigestAlgorithm::Sha1,
            Inner::Sha256(_) => DigestAlgorithm::Sha256,
            Inner::Sha512(_) => DigestAlgorithm::Sha512,
            Inner::Blake3(_) => DigestAlgorithm::Blake3,
        };
        write!(f, "Hasher({algorithm})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Cursor;

    const EMPTY_SHA1: &str = "DA39A3EE5E6B4B0D3255BFEF95601890AFD80709";
    const EMPTY_SHA256: &str = "E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855";
    const EMPTY_BLAKE3: &str = "AF1349B9F5F9A1A6A0404DEA36DCC9499BCB25C9ADC112B7CC9A93CAE41F3262";

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            DigestAlgorithm::Sha1.hash(b"abc").as_str(),
            "A9993E364706816ABA3E25717850C26C9CD0D89D"
        );
        assert_eq!(
            DigestAlgorithm::Sha256.hash(b"abc").as_str(),
            "BA7816BF8F01CFEA414140DE5DAE2223B00361A396177A9CB410FF61F20015AD"
        );
        assert_eq!(
            DigestAlgorithm::Sha512.hash(b"abc").as_str(),
            "DDAF35A193617ABACC417349AE20413112E6FA4E89A97EA20A9EEEE64B55D39A\
             2192992A274FC1A836BA3C23A3FEEBBD454D4423643CE80E2A9AC94FA54CA49F"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(DigestAlgorithm::Sha1.hash(b"").as_str(), EMPTY_SHA1);
        assert_eq!(DigestAlgorithm::Sha256.hash(b"").as_str(), EMPTY_SHA256);
        assert_eq!(DigestAlgorithm::Blake3.hash(b"").as_str(), EMPTY_BLAKE3);
    }

    #[test]
    fn test_zero_update_state_equals_empty_input() {
        for algorithm in DigestAlgorithm::ALL {
            let untouched = Hasher::new(algorithm).finalize();
            assert_eq!(untouched, algorithm.hash(b""));
        }
    }

    #[test]
    fn test_leading_zero_bytes_keep_full_width() {
        // Inputs whose digests start with a 0x00 byte; a big-integer
        // rendering would drop the leading "00".
        let sha256 = DigestAlgorithm::Sha256.hash(b"pkg-233");
        assert_eq!(
            sha256.as_str(),
            "0037AC1DFFA4A61694A61867F117B5A85055675DCE5FAF8E0FF8D588181639A2"
        );

        let sha1 = DigestAlgorithm::Sha1.hash(b"pkg-124");
        assert_eq!(sha1.as_str(), "009C30A42CC59E381C4C70F8B309E65606C618EB");
    }

    #[test]
    fn test_hash_reader_empty() {
        for algorithm in DigestAlgorithm::ALL {
            let streamed = algorithm.hash_reader(&mut Cursor::new(&[] as &[u8])).unwrap();
            assert_eq!(streamed, algorithm.hash(b""));
        }
    }

    #[test]
    fn test_hash_reader_multi_chunk() {
        let data: Vec<u8> = (0..8192usize).map(|i| (i % 251) as u8).collect();
        let streamed = DigestAlgorithm::Sha256
            .hash_reader(&mut Cursor::new(&data))
            .unwrap();
        assert_eq!(
            streamed.as_str(),
            "25DF2449B2E5A35FEA14E02A7158E283801A1069C9F84631B9A9DACB2F809A7F"
        );
        assert_eq!(streamed, DigestAlgorithm::Sha256.hash(&data));
    }

    #[test]
    fn test_algorithm_names_roundtrip() {
        for algorithm in DigestAlgorithm::ALL {
            let parsed: DigestAlgorithm = algorithm.name().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
        assert_eq!("sha256".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha256);
        assert_eq!("SHA-512".parse::<DigestAlgorithm>().unwrap(), DigestAlgorithm::Sha512);
    }

    #[test]
    fn test_unknown_algorithm_name() {
        let err = "md5".parse::<DigestAlgorithm>().unwrap_err();
        assert_eq!(err.name, "md5");
        assert_eq!(err.to_string(), "unsupported digest algorithm: md5");
    }

    proptest! {
        #[test]
        fn prop_hash_deterministic_and_fixed_width(
            data in proptest::collection::vec(any::<u8>(), 0..4096),
        ) {
            for algorithm in DigestAlgorithm::ALL {
                let first = algorithm.hash(&data);
                let second = algorithm.hash(&data);
                prop_assert_eq!(&first, &second);
                prop_assert_eq!(first.as_str().len(), algorithm.hex_len());
                prop_assert_eq!(first.len_bytes(), algorithm.digest_len());
            }
        }

        #[test]
        fn prop_hash_reader_matches_one_shot(
            data in proptest::collection::vec(any::<u8>(), 0..4096),
        ) {
            for algorithm in DigestAlgorithm::ALL {
                let streamed = algorithm.hash_reader(&mut Cursor::new(&data)).unwrap();
                prop_assert_eq!(streamed, algorithm.hash(&data));
            }
        }
    }
}
