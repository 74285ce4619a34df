//! Hash Value Object
//!
//! An 81-tryte ledger hash, used for trunk and branch transaction
//! references. Fixed length, same alphabet as [`Trytes`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::trytes::{Trytes, TrytesError};

/// Length of a ledger hash in trytes
pub const HASH_LENGTH: usize = 81;

/// Error returned when hash validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The underlying tryte validation failed
    #[error(transparent)]
    Trytes(#[from] TrytesError),
}

/// Validated 81-tryte hash
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hash(Trytes);

impl Hash {
    /// Create a new hash with validation
    pub fn new(value: impl Into<String>) -> Result<Self, HashError> {
        let trytes = Trytes::with_length(value, HASH_LENGTH)?;
        Ok(Self(trytes))
    }

    /// Get the underlying trytes
    #[inline]
    pub fn as_trytes(&self) -> &Trytes {
        &self.0
    }

    /// Get the hash as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Hash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Hash::new(s)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hash").field(&self.as_str()).finish()
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for Hash {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Hash {
    type Error = HashError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hash> for String {
    fn from(hash: Hash) -> Self {
        hash.0.into_inner()
    }
}
