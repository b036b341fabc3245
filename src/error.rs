//! Error types for codec lookups.
//!
//! Both failures are deterministic and local: the same input always produces
//! the same outcome, and the codec never substitutes a default character or
//! index in place of reporting. Recovery policy (skip, substitute, abort)
//! belongs entirely to the caller.

use thiserror::Error;

/// Failure of a character → index or index → character lookup.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The character is not a member of the fixed alphabet.
    #[error("unknown symbol {ch:?} (U+{code:04X})", code = *.ch as u32)]
    UnknownSymbol { ch: char },

    /// The index falls outside the alphabet's `[0, len)` range.
    #[error("index {index} out of range for alphabet of {len} symbols")]
    IndexOutOfRange { index: usize, len: usize },
}
