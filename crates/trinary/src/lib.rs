//! Trinary Crate - Ledger Value Objects
//!
//! Validated string types for the tryte-encoded ledger domain:
//! - [`Trytes`] - variable-length string over the tryte alphabet `9A-Z`
//! - [`Hash`] - fixed 81-tryte transaction/branch/trunk hash
//!
//! Both types enforce their invariants at construction, so any instance
//! handed across a crate boundary is already known valid.

pub mod hash;
pub mod trytes;

pub use hash::{Hash, HashError};
pub use trytes::{Trytes, TrytesError};

/// The tryte alphabet: `9` followed by `A`-`Z`.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Check whether a character is a valid tryte character
#[inline]
pub(crate) fn is_tryte_char(c: char) -> bool {
    c == '9' || c.is_ascii_uppercase()
}
