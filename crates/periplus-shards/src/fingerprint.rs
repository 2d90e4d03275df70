//! Deterministic content fingerprints.
//!
//! A [`Fingerprint`] is the lower-case hex SHA-256 digest of a path string.
//! It is only ever used as a lookup key and is never parsed for meaning.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::ShardError;
use crate::path::RoutePath;

/// Length of a fingerprint in hex characters.
pub const FINGERPRINT_LEN: usize = 64;

/// Opaque handle for a registered route path.
///
/// # Example
///
/// ```rust
/// use periplus_shards::{fingerprint, Fingerprint, RoutePath};
///
/// let a = Fingerprint::of(&RoutePath::new("/home"));
/// let b = fingerprint("/home");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint a canonical route path.
    #[must_use]
    pub fn of(path: &RoutePath) -> Self {
        fingerprint(path.as_str())
    }

    /// Returns the hex representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns a shortened form for log output.
    #[must_use]
    pub fn short(&self) -> &str {
        self.0.get(..12).unwrap_or(self.0.as_str())
    }
}

/// Compute the fingerprint of an arbitrary string.
///
/// Same input, same output: the digest is SHA-256 over the UTF-8 bytes.
#[must_use]
pub fn fingerprint(input: &str) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    Fingerprint(format!("{:x}", hasher.finalize()))
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Fingerprint {
    type Err = ShardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != FINGERPRINT_LEN {
            return Err(ShardError::malformed(
                s,
                format!("expected {FINGERPRINT_LEN} hex characters, got {}", s.len()),
            ));
        }
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ShardError::malformed(s, "contains non-hex characters"));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = ShardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}
