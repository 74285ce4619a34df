//! Trytes Value Object
//!
//! A validated run of tryte characters. The tryte alphabet is `9` plus the
//! uppercase ASCII letters; anything else is rejected at construction.
//!
//! ## Invariants
//! - Non-empty
//! - Every character in `[9A-Z]`
//! - Optional exact length when built via [`Trytes::with_length`]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::is_tryte_char;

/// Error returned when tryte validation fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrytesError {
    /// Input is empty
    #[error("Trytes cannot be empty")]
    Empty,

    /// Input contains a character outside the tryte alphabet
    #[error("Invalid character '{char}' at position {position}. Only 9 and A-Z are allowed")]
    InvalidCharacter { char: char, position: usize },

    /// Input does not match the required length
    #[error("Trytes length is {length}, expected {expected}")]
    InvalidLength { length: usize, expected: usize },
}

/// Validated tryte string
///
/// Round-trips through its string form without alteration:
/// `Trytes::new(t.as_str()) == t` for every valid `t`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Trytes(String);

impl Trytes {
    /// Create new trytes with validation
    pub fn new(value: impl Into<String>) -> Result<Self, TrytesError> {
        let value = value.into();
        Self::validate(&value)?;
        Ok(Self(value))
    }

    /// Create new trytes, additionally requiring an exact length
    pub fn with_length(value: impl Into<String>, expected: usize) -> Result<Self, TrytesError> {
        let value = value.into();
        Self::validate(&value)?;
        let length = value.chars().count();
        if length != expected {
            return Err(TrytesError::InvalidLength { length, expected });
        }
        Ok(Self(value))
    }

    fn validate(value: &str) -> Result<(), TrytesError> {
        if value.is_empty() {
            return Err(TrytesError::Empty);
        }
        for (position, char) in value.chars().enumerate() {
            if !is_tryte_char(char) {
                return Err(TrytesError::InvalidCharacter { char, position });
            }
        }
        Ok(())
    }

    /// Get the trytes as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of trytes
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to the owned inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Trytes {
    type Err = TrytesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trytes::new(s)
    }
}

impl fmt::Display for Trytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Trytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Trytes").field(&self.0).finish()
    }
}

impl AsRef<str> for Trytes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Trytes {
    type Error = TrytesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Trytes {
    type Error = TrytesError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Trytes> for String {
    fn from(trytes: Trytes) -> Self {
        trytes.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validation {
        use super::*;

        #[test]
        fn test_valid_trytes() {
            assert!(Trytes::new("ABC9").is_ok());
            assert!(Trytes::new("9").is_ok());
            assert!(Trytes::new("Z".repeat(2673)).is_ok());
        }

        #[test]
        fn test_full_alphabet_valid() {
            let trytes = Trytes::new(crate::TRYTE_ALPHABET).unwrap();
            assert_eq!(trytes.len(), 27);
        }

        #[test]
        fn test_empty_fails() {
            assert!(matches!(Trytes::new(""), Err(TrytesError::Empty)));
        }

        #[test]
        fn test_lowercase_fails() {
            assert!(matches!(
                Trytes::new("abc"),
                Err(TrytesError::InvalidCharacter { char: 'a', position: 0 })
            ));
        }

        #[test]
        fn test_digit_fails() {
            assert!(matches!(
                Trytes::new("AB1"),
                Err(TrytesError::InvalidCharacter { char: '1', position: 2 })
            ));
        }

        #[test]
        fn test_whitespace_fails() {
            assert!(matches!(
                Trytes::new("AB C"),
                Err(TrytesError::InvalidCharacter { char: ' ', position: 2 })
            ));
        }

        #[test]
        fn test_unicode_fails() {
            assert!(matches!(
                Trytes::new("ÅBC"),
                Err(TrytesError::InvalidCharacter { char: 'Å', position: 0 })
            ));
        }
    }

    mod length {
        use super::*;

        #[test]
        fn test_with_length_exact() {
            assert!(Trytes::with_length("ABC", 3).is_ok());
        }

        #[test]
        fn test_with_length_mismatch() {
            assert!(matches!(
                Trytes::with_length("ABC", 4),
                Err(TrytesError::InvalidLength { length: 3, expected: 4 })
            ));
        }

        #[test]
        fn test_len() {
            let trytes = Trytes::new("ABC9").unwrap();
            assert_eq!(trytes.len(), 4);
            assert!(!trytes.is_empty());
        }
    }

    mod roundtrip {
        use super::*;

        #[test]
        fn test_string_roundtrip_idempotent() {
            let original = Trytes::new("LB9MB9CH9FVVNN99").unwrap();
            let roundtripped = Trytes::new(original.to_string()).unwrap();
            assert_eq!(original, roundtripped);
        }

        #[test]
        fn test_from_str() {
            let trytes: Trytes = "ABC".parse().unwrap();
            assert_eq!(trytes.as_str(), "ABC");
        }

        #[test]
        fn test_into_string() {
            let trytes = Trytes::new("ABC").unwrap();
            let s: String = trytes.into();
            assert_eq!(s, "ABC");
        }
    }

    mod serialization {
        use super::*;

        #[test]
        fn test_serialize() {
            let trytes = Trytes::new("ABC").unwrap();
            let json = serde_json::to_string(&trytes).unwrap();
            assert_eq!(json, "\"ABC\"");
        }

        #[test]
        fn test_deserialize() {
            let trytes: Trytes = serde_json::from_str("\"ABC\"").unwrap();
            assert_eq!(trytes.as_str(), "ABC");
        }

        #[test]
        fn test_deserialize_invalid() {
            let result: Result<Trytes, _> = serde_json::from_str("\"abc\"");
            assert!(result.is_err());
        }
    }

    mod error_messages {
        use super::*;

        #[test]
        fn test_invalid_character_display() {
            let err = TrytesError::InvalidCharacter { char: '!', position: 5 };
            let msg = err.to_string();
            assert!(msg.contains('!') && msg.contains('5'));
        }
    }
}
