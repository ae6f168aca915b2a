//! Value types shared across UAppID derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message digest rendered as uppercase hexadecimal.
///
/// Every digest byte becomes exactly two characters, so the rendered width
/// never varies for a given algorithm: leading zero bytes keep their `00`
/// pair instead of collapsing the way big-integer formatting would.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexDigest(String);

impl HexDigest {
    /// Render raw digest output as uppercase hex.
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self(hex::encode_upper(bytes))
    }

    /// Parse a hex string, normalizing to uppercase.
    ///
    /// Rejects empty, odd-length, and non-hex input.
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        if s.is_empty() {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        hex::decode(s)?;
        Ok(Self(s.to_ascii_uppercase()))
    }

    /// The rendered hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest width in bytes.
    pub fn len_bytes(&self) -> usize {
        self.0.len() / 2
    }
}

impl fmt::Display for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexDigest({})", &self.0[..self.0.len().min(16)])
    }
}

impl AsRef<str> for HexDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexDigest {
    type Error = hex::FromHexError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<HexDigest> for String {
    fn from(digest: HexDigest) -> Self {
        digest.0
    }
}
