//! charidx — bidirectional codec between a fixed 85-character alphabet and
//! dense integer indices.
//!
//! The alphabet (ASCII letters, digits, common punctuation, newline, space
//! and a few accented/typographic characters) lives in [`alphabet::ALPHABET`];
//! its ordering is the compatibility contract. [`SymbolCodec`] derives the
//! character → index map from that one array at construction, giving O(1)
//! lookups in both directions with no possibility of the two drifting apart.
//!
//! Lookups are strict: a character outside the alphabet or an index outside
//! `[0, 84]` comes back as a [`CodecError`], never as a silent substitute.

pub mod alphabet;
pub mod codec;
pub mod coverage;
pub mod error;

pub use alphabet::{ALPHABET, ALPHABET_LEN};
pub use codec::SymbolCodec;
pub use coverage::Coverage;
pub use error::CodecError;
